//! Aerial signup core library.
//!
//! `aerial-core` holds the submission record, the per-step validators, the
//! wizard state machine and its durable storage. Nothing in here touches the
//! terminal; the TUI crate drives these types.

pub mod cli;
pub mod config;
pub mod documents;
pub mod errors;
pub mod logging;
pub mod members;
pub mod record;
pub mod state_manager;
pub mod summary;
pub mod validation;
pub mod wizard;

pub use errors::{Result, SignupError};
pub use record::{Account, Profile, Step, StepData, SubmissionRecord};
pub use wizard::{LoadOutcome, StepStatus, WizardState};
