//! Wizard state: the submission record, the current step, and the store the
//! record is mirrored to after every save.

use crate::errors::SignupError;
use crate::record::{Step, StepData, SubmissionRecord, MAX_MEMBERS};
use crate::state_manager::{RecordStore, STORAGE_KEY};
use crate::validation::{self, ValidationErrors};
use anyhow::{Context, Result};

/// What `load` found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored; defaults in place.
    Fresh,
    Restored,
    /// The stored entry could not be read or decoded; defaults in place.
    Discarded { reason: String },
}

/// Indicator state of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

pub struct WizardState {
    record: SubmissionRecord,
    current_step: Step,
    store: Box<dyn RecordStore>,
    key: String,
}

impl std::fmt::Debug for WizardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardState")
            .field("current_step", &self.current_step)
            .field("key", &self.key)
            .field("is_complete", &self.record.is_complete)
            .finish()
    }
}

impl WizardState {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn RecordStore>, key: &str) -> Self {
        Self {
            record: SubmissionRecord::default(),
            current_step: Step::Account,
            store,
            key: key.to_string(),
        }
    }

    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Merge the stored entry (if any) over the default record.
    ///
    /// Never fails: an unreadable or malformed entry leaves the defaults in
    /// place and is reported as `Discarded`.
    pub fn load(&mut self) -> LoadOutcome {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Fresh,
            Err(err) => {
                log::warn!("Saved signup progress unreadable: {:#}", err);
                return LoadOutcome::Discarded {
                    reason: format!("{:#}", err),
                };
            }
        };

        match serde_json::from_str::<SubmissionRecord>(&raw) {
            Ok(record) if record.members.len() > MAX_MEMBERS => {
                let reason = format!(
                    "{} members stored, at most {} allowed",
                    record.members.len(),
                    MAX_MEMBERS
                );
                log::warn!("Discarding malformed signup progress: {}", reason);
                LoadOutcome::Discarded { reason }
            }
            Ok(record) => {
                self.record = record;
                log::info!("Restored saved signup progress ({})", self.key);
                LoadOutcome::Restored
            }
            Err(err) => {
                log::warn!("Discarding malformed signup progress: {}", err);
                LoadOutcome::Discarded {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Merge `data` into the part of the record owned by `step`, then persist
    /// the whole record.
    ///
    /// The in-memory merge is kept even when persisting fails; the error is
    /// returned so the caller can warn.
    pub fn save_step(&mut self, step: Step, data: StepData) -> Result<()> {
        if data.step() != step {
            return Err(SignupError::StepMismatch {
                step: step.number(),
                data: data.kind(),
            }
            .into());
        }

        match data {
            StepData::Account(patch) => self.record.merge_account(patch),
            StepData::Profile(patch) => self.record.merge_profile(patch),
            StepData::Members(members) => {
                if members.len() > MAX_MEMBERS {
                    return Err(SignupError::MemberLimit { limit: MAX_MEMBERS }.into());
                }
                self.record.members = members;
            }
            StepData::Documents(documents) => self.record.documents = documents,
            StepData::Review => self.record.is_complete = true,
        }
        log::debug!("Saved step {} ({})", step.number(), step.label());

        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let payload =
            serde_json::to_string(&self.record).context("Failed to serialize signup record")?;
        self.store
            .write(&self.key, &payload)
            .map_err(|err| SignupError::Storage(format!("{:#}", err)))?;
        Ok(())
    }

    /// Validate the stored data for step `n` (1-based).
    pub fn validate_step(&self, n: u8) -> std::result::Result<(), ValidationErrors> {
        match Step::from_number(n) {
            Some(Step::Account) => validation::validate_account(&self.record.account),
            Some(Step::Profile) => validation::validate_profile(&self.record.profile),
            Some(Step::Members) | Some(Step::Documents) | Some(Step::Review) => Ok(()),
            None => Err(ValidationErrors::single("Unknown step")),
        }
    }

    /// Move forward if the current step validates. No-op on the last step.
    pub fn advance(&mut self) -> std::result::Result<Step, ValidationErrors> {
        self.validate_step(self.current_step.number())?;
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
        Ok(self.current_step)
    }

    /// Move back one step. No-op on the first step.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.current_step.prev() {
            self.current_step = prev;
        }
        self.current_step
    }

    /// Step-indicator shortcut: go straight to `step` without validating.
    pub fn jump_to(&mut self, step: Step) -> Step {
        if step > self.current_step {
            log::debug!(
                "Jumping ahead from step {} to {} without validation",
                self.current_step.number(),
                step.number()
            );
        }
        self.current_step = step;
        self.current_step
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.current_step.number()) / f64::from(Step::TOTAL) * 100.0
    }

    pub fn progress_text(&self) -> String {
        format!("{}/{} Complete", self.current_step.number(), Step::TOTAL)
    }

    pub fn step_status(&self, step: Step) -> StepStatus {
        if step < self.current_step {
            StepStatus::Completed
        } else if step == self.current_step {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// The user has seen the completion summary: forget everything.
    pub fn acknowledge_completion(&mut self) -> Result<()> {
        self.record = SubmissionRecord::default();
        self.current_step = Step::Account;
        self.store
            .remove(&self.key)
            .map_err(|err| SignupError::Storage(format!("{:#}", err)))?;
        log::info!("Signup complete; cleared saved progress");
        Ok(())
    }

    /// Start over from step 1 with whatever is in storage.
    pub fn reload(&mut self) -> LoadOutcome {
        self.record = SubmissionRecord::default();
        self.current_step = Step::Account;
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AccountPatch, ProfilePatch};
    use crate::state_manager::MemoryStore;

    fn jo() -> StepData {
        StepData::Account(AccountPatch {
            name: Some("Jo".to_string()),
            email: Some("jo@x.com".to_string()),
            password: Some("Abcdef12".to_string()),
            confirm_password: Some("Abcdef12".to_string()),
        })
    }

    fn profile() -> StepData {
        StepData::Profile(ProfilePatch {
            name: Some("Jo Pilot".to_string()),
            photo: None,
            phone_number: Some("+1 555 0100".to_string()),
            role: Some("Drone Operator".to_string()),
            department: Some("Operations".to_string()),
        })
    }

    fn state() -> WizardState {
        WizardState::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn saving_account_then_advancing() {
        let mut wizard = state();
        wizard.save_step(Step::Account, jo()).unwrap();
        assert!(wizard.validate_step(1).is_ok());
        assert_eq!(wizard.advance().unwrap(), Step::Profile);
        assert_eq!(wizard.record().account.name, "Jo");
    }

    #[test]
    fn advance_is_blocked_by_invalid_step() {
        let mut wizard = state();
        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(wizard.current_step(), Step::Account);
    }

    #[test]
    fn bounds_are_clamped() {
        let mut wizard = state();
        assert_eq!(wizard.retreat(), Step::Account);

        wizard.jump_to(Step::Review);
        assert_eq!(wizard.advance().unwrap(), Step::Review);
        assert_eq!(wizard.retreat(), Step::Documents);
    }

    #[test]
    fn retreat_does_not_validate() {
        let mut wizard = state();
        wizard.jump_to(Step::Profile);
        assert_eq!(wizard.retreat(), Step::Account);
    }

    #[test]
    fn optional_steps_always_pass() {
        let wizard = state();
        assert!(wizard.validate_step(3).is_ok());
        assert!(wizard.validate_step(4).is_ok());
        assert!(wizard.validate_step(5).is_ok());
        assert_eq!(
            wizard.validate_step(9).unwrap_err().messages(),
            ["Unknown step".to_string()]
        );
    }

    #[test]
    fn step_data_must_match_step() {
        let mut wizard = state();
        let err = wizard.save_step(Step::Profile, jo()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SignupError>(),
            Some(SignupError::StepMismatch { step: 2, .. })
        ));
        assert_eq!(wizard.record().account.name, "");
    }

    #[test]
    fn members_over_limit_are_rejected() {
        let mut wizard = state();
        let six = (0..6).map(|i| format!("m{}@x.com", i)).collect();
        assert!(wizard.save_step(Step::Members, StepData::Members(six)).is_err());
        assert!(wizard.record().members.is_empty());

        let five: Vec<String> = (0..5).map(|i| format!("m{}@x.com", i)).collect();
        wizard
            .save_step(Step::Members, StepData::Members(five.clone()))
            .unwrap();
        assert_eq!(wizard.record().members, five);
    }

    #[test]
    fn stored_roster_over_limit_is_discarded() {
        let store = MemoryStore::with_entry(
            STORAGE_KEY,
            r#"{"account":{"name":"Jo"},"members":["a","b","c","d","e","f","g"]}"#,
        );
        let mut wizard = WizardState::new(Box::new(store));
        assert_eq!(
            wizard.load(),
            LoadOutcome::Discarded {
                reason: "7 members stored, at most 5 allowed".to_string()
            }
        );
        assert!(wizard.record().members.is_empty());
        assert_eq!(wizard.record().account.name, "");
    }

    #[test]
    fn profile_photo_can_be_cleared() {
        let mut wizard = state();
        let with_photo = |photo: Option<&str>| {
            StepData::Profile(ProfilePatch {
                photo: Some(photo.map(str::to_string)),
                ..ProfilePatch::default()
            })
        };
        wizard
            .save_step(Step::Profile, with_photo(Some("me.png")))
            .unwrap();
        assert_eq!(wizard.record().profile.photo.as_deref(), Some("me.png"));

        wizard.save_step(Step::Profile, with_photo(None)).unwrap();
        assert_eq!(wizard.record().profile.photo, None);
    }

    #[test]
    fn review_marks_complete() {
        let mut wizard = state();
        wizard.save_step(Step::Review, StepData::Review).unwrap();
        assert!(wizard.record().is_complete);
    }

    #[test]
    fn storage_failure_keeps_in_memory_merge() {
        let mut store = MemoryStore::new();
        store.fail_writes = true;
        let mut wizard = WizardState::new(Box::new(store));

        let err = wizard.save_step(Step::Account, jo()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SignupError>(),
            Some(SignupError::Storage(_))
        ));
        assert_eq!(wizard.record().account.name, "Jo");
    }

    #[test]
    fn malformed_entry_falls_back_to_defaults() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        let mut wizard = WizardState::new(Box::new(store));
        assert!(matches!(wizard.load(), LoadOutcome::Discarded { .. }));
        assert_eq!(wizard.record(), &SubmissionRecord::default());
    }

    #[test]
    fn missing_entry_is_fresh() {
        let mut wizard = state();
        assert_eq!(wizard.load(), LoadOutcome::Fresh);
    }

    #[test]
    fn progress_tracks_current_step() {
        let mut wizard = state();
        assert_eq!(wizard.progress_text(), "1/5 Complete");
        assert!((wizard.progress_percent() - 20.0).abs() < f64::EPSILON);

        wizard.jump_to(Step::Members);
        assert_eq!(wizard.step_status(Step::Account), StepStatus::Completed);
        assert_eq!(wizard.step_status(Step::Members), StepStatus::Active);
        assert_eq!(wizard.step_status(Step::Review), StepStatus::Pending);
    }

    #[test]
    fn acknowledge_resets_everything() {
        let mut wizard = state();
        wizard.save_step(Step::Account, jo()).unwrap();
        wizard.save_step(Step::Profile, profile()).unwrap();
        wizard.jump_to(Step::Review);
        wizard.save_step(Step::Review, StepData::Review).unwrap();

        wizard.acknowledge_completion().unwrap();
        assert_eq!(wizard.current_step(), Step::Account);
        assert_eq!(wizard.record(), &SubmissionRecord::default());
        assert_eq!(wizard.load(), LoadOutcome::Fresh);
    }
}
