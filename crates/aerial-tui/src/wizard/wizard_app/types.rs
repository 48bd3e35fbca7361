use std::time::Instant;

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Which screen is showing. Sign-in replaces the wizard form; it is not a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Wizard,
    SignIn,
}

/// Summary shown after the review step is completed.
#[derive(Debug, Clone)]
pub struct CompletionModal {
    pub lines: Vec<String>,
    pub closes_at: Instant,
}
