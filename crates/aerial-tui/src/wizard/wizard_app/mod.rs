//! Application state machine for the signup wizard

mod app;
mod forms;
mod types;

pub use app::App;
pub use forms::{AccountForm, ProfileForm};
pub use types::{CompletionModal, InputResult, View};
