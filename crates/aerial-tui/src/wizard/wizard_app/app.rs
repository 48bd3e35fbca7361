//! Key handling for the signup wizard.

use super::forms::{
    adjust_index, AccountForm, DocumentsForm, MembersForm, ProfileForm, SignInForm,
};
use super::types::{CompletionModal, InputResult, View};
use crate::widgets::{ToastKind, ToastQueue};
use aerial_core::config::WizardConfig;
use aerial_core::documents::{inspect_document, inspect_photo};
use aerial_core::summary;
use aerial_core::validation::{self, ValidationErrors};
use aerial_core::{LoadOutcome, Step, StepData, WizardState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::time::Instant;

const ACCOUNT_CREATED: &str = "Account created successfully! Moving to next step...";
const PROFILE_SAVED: &str = "Profile saved";
const SIGN_IN_OFFLINE: &str = "Sign-in is not available offline";

pub struct App {
    pub wizard: WizardState,
    pub config: WizardConfig,
    pub view: View,
    pub account: AccountForm,
    pub profile: ProfileForm,
    pub members: MembersForm,
    pub documents: DocumentsForm,
    pub sign_in: SignInForm,
    /// Show password fields in clear text.
    pub password_visible: bool,
    pub toasts: ToastQueue,
    pub completion: Option<CompletionModal>,
}

impl App {
    pub fn new(wizard: WizardState, config: WizardConfig) -> Self {
        let record = wizard.record();
        Self {
            account: AccountForm::from_record(record),
            profile: ProfileForm::from_record(record, &config.departments),
            members: MembersForm::from_record(record),
            documents: DocumentsForm::from_record(record),
            sign_in: SignInForm::default(),
            wizard,
            config,
            view: View::Wizard,
            password_visible: false,
            toasts: ToastQueue::new(),
            completion: None,
        }
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    /// Tell the user what startup found in storage.
    pub fn report_load(&mut self, outcome: &LoadOutcome) {
        let now = Instant::now();
        match outcome {
            LoadOutcome::Fresh => {}
            LoadOutcome::Restored => self.toasts.push(
                ToastKind::Info,
                vec!["Restored saved progress".to_string()],
                now,
                self.config.success_toast(),
            ),
            LoadOutcome::Discarded { .. } => self.toasts.push(
                ToastKind::Warning,
                vec!["Saved progress was unreadable and has been ignored".to_string()],
                now,
                self.config.error_toast(),
            ),
        }
    }

    /// Rebuild the form for `step` from the record.
    pub fn refresh_form(&mut self, step: Step) {
        let record = self.wizard.record();
        match step {
            Step::Account => self.account = AccountForm::from_record(record),
            Step::Profile => {
                self.profile = ProfileForm::from_record(record, &self.config.departments)
            }
            Step::Members => self.members = MembersForm::from_record(record),
            Step::Documents => self.documents = DocumentsForm::from_record(record),
            Step::Review => {}
        }
    }

    /// Expire toasts and auto-close the completion summary.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);
        if self
            .completion
            .as_ref()
            .is_some_and(|modal| modal.closes_at <= now)
        {
            self.close_completion(now);
        }
    }

    pub fn close_completion(&mut self, now: Instant) {
        if self.completion.take().is_none() {
            return;
        }
        if let Err(err) = self.wizard.acknowledge_completion() {
            log::warn!("Could not clear saved progress: {:#}", err);
            self.warn_storage(now);
        }
        self.refresh_all();
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        self.handle_input_at(key, Instant::now())
    }

    pub fn handle_input_at(&mut self, key: KeyEvent, now: Instant) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }

        if self.completion.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.close_completion(now);
            }
            return InputResult::Continue;
        }

        if ctrl && key.code == KeyCode::Char('p') {
            self.password_visible = !self.password_visible;
            return InputResult::Continue;
        }

        match self.view {
            View::SignIn => self.handle_sign_in(key, now),
            View::Wizard => {
                if ctrl && key.code == KeyCode::Char('l') {
                    self.sign_in = SignInForm::default();
                    self.view = View::SignIn;
                    return InputResult::Continue;
                }
                self.handle_wizard(key, now);
            }
        }
        InputResult::Continue
    }

    // ------------------------------------------------------------------
    // Wizard
    // ------------------------------------------------------------------

    fn handle_wizard(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::F(n @ 1..=5) => {
                if let Some(step) = Step::from_number(n) {
                    let step = self.wizard.jump_to(step);
                    self.refresh_form(step);
                }
                return;
            }
            KeyCode::Esc => {
                let step = self.wizard.retreat();
                self.refresh_form(step);
                return;
            }
            _ => {}
        }

        match self.current_step() {
            Step::Account => self.handle_account(key, now),
            Step::Profile => self.handle_profile(key, now),
            Step::Members => self.handle_members(key, now),
            Step::Documents => self.handle_documents(key, now),
            Step::Review => {
                if key.code == KeyCode::Enter {
                    self.complete(now);
                }
            }
        }
    }

    fn handle_account(&mut self, key: KeyEvent, now: Instant) {
        let len = self.account.fields.len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => adjust_index(len, &mut self.account.focus, 1),
            KeyCode::BackTab | KeyCode::Up => adjust_index(len, &mut self.account.focus, -1),
            KeyCode::Enter => {
                let account = self.account.extract();
                if let Err(errors) = validation::validate_account(&account) {
                    self.show_errors(&errors, now);
                    return;
                }
                self.save_and_advance(Step::Account, StepData::Account(account.into()), now);
            }
            _ => {
                self.account.focused_mut().handle_key(key);
            }
        }
    }

    fn handle_profile(&mut self, key: KeyEvent, now: Instant) {
        let on_department = self.profile.focus == ProfileForm::DEPARTMENT;
        let departments = self.config.departments.len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                adjust_index(ProfileForm::FOCUS_COUNT, &mut self.profile.focus, 1)
            }
            KeyCode::BackTab | KeyCode::Up => {
                adjust_index(ProfileForm::FOCUS_COUNT, &mut self.profile.focus, -1)
            }
            KeyCode::Left if on_department => self.profile.cycle_department(departments, -1),
            KeyCode::Right | KeyCode::Char(' ') if on_department => {
                self.profile.cycle_department(departments, 1)
            }
            KeyCode::Enter if self.profile.on_photo() && !self.profile.fields[ProfileForm::PHOTO].is_empty() => {
                let raw = self.profile.fields[ProfileForm::PHOTO].value().trim().to_string();
                match inspect_photo(Path::new(&raw)) {
                    Ok(photo) => {
                        log::info!("Accepted {} as profile photo", photo.file_name);
                        self.profile.set_photo(&photo);
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.toast(ToastKind::Error, message, now);
                    }
                }
            }
            KeyCode::Delete if self.profile.on_photo() && self.profile.fields[ProfileForm::PHOTO].is_empty() => {
                self.profile.clear_photo();
            }
            KeyCode::Enter => {
                let profile = self.profile.extract(&self.config.departments);
                if let Err(errors) = validation::validate_profile(&profile) {
                    self.show_errors(&errors, now);
                    return;
                }
                self.save_and_advance(Step::Profile, StepData::Profile(profile.into()), now);
            }
            _ => {
                if let Some(field) = self.profile.focused_field_mut() {
                    field.handle_key(key);
                }
            }
        }
    }

    fn handle_members(&mut self, key: KeyEvent, now: Instant) {
        let form = &mut self.members;
        match key.code {
            KeyCode::Up => adjust_index(form.roster.len(), &mut form.selected, -1),
            KeyCode::Down => adjust_index(form.roster.len(), &mut form.selected, 1),
            KeyCode::Delete if form.input.is_empty() => {
                if form.roster.remove(form.selected).is_some() {
                    form.selected = form.selected.min(form.roster.len().saturating_sub(1));
                }
            }
            KeyCode::Enter if form.input.value().trim().is_empty() => {
                form.input.clear();
                let members = form.roster.clone().into_vec();
                self.save_and_advance(Step::Members, StepData::Members(members), now);
            }
            KeyCode::Enter => match form.roster.add(form.input.value()) {
                Ok(_) => form.input.clear(),
                Err(err) => {
                    let message = err.to_string();
                    self.toast(ToastKind::Error, message, now);
                }
            },
            _ => {
                form.input.handle_key(key);
            }
        }
    }

    fn handle_documents(&mut self, key: KeyEvent, now: Instant) {
        let count = self.documents.focus_count();
        match key.code {
            KeyCode::Tab | KeyCode::Down => adjust_index(count, &mut self.documents.focus, 1),
            KeyCode::BackTab | KeyCode::Up => adjust_index(count, &mut self.documents.focus, -1),
            KeyCode::Enter if self.documents.on_continue() => {
                let names = self.documents.file_names();
                self.save_and_advance(Step::Documents, StepData::Documents(names), now);
            }
            KeyCode::Enter => {
                let Some(entry) = self.documents.focused_entry_mut() else {
                    return;
                };
                let raw = entry.path.value().trim().to_string();
                if raw.is_empty() {
                    return;
                }
                match inspect_document(Path::new(&raw)) {
                    Ok(doc) => {
                        log::info!("Accepted {} for {}", doc.file_name, entry.slot.label());
                        entry.detail = Some(doc.display());
                        entry.uploaded = Some(doc.file_name);
                        entry.path.clear();
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.toast(ToastKind::Error, message, now);
                    }
                }
            }
            _ => {
                if let Some(entry) = self.documents.focused_entry_mut() {
                    entry.path.handle_key(key);
                }
            }
        }
    }

    fn complete(&mut self, now: Instant) {
        if let Err(err) = self.wizard.save_step(Step::Review, StepData::Review) {
            log::warn!("Could not save completion: {:#}", err);
            self.warn_storage(now);
        }
        self.completion = Some(CompletionModal {
            lines: summary::completion_lines(self.wizard.record()),
            closes_at: now + self.config.completion_close(),
        });
    }

    fn save_and_advance(&mut self, step: Step, data: StepData, now: Instant) {
        if let Err(err) = self.wizard.save_step(step, data) {
            log::warn!("Could not save step {}: {:#}", step.number(), err);
            self.warn_storage(now);
        }
        match self.wizard.advance() {
            Ok(next) => {
                match step {
                    Step::Account => self.toast(ToastKind::Success, ACCOUNT_CREATED.into(), now),
                    Step::Profile => self.toast(ToastKind::Success, PROFILE_SAVED.into(), now),
                    _ => {}
                }
                self.refresh_form(next);
            }
            Err(errors) => self.show_errors(&errors, now),
        }
    }

    // ------------------------------------------------------------------
    // Sign in
    // ------------------------------------------------------------------

    fn handle_sign_in(&mut self, key: KeyEvent, now: Instant) {
        let len = self.sign_in.fields.len();
        match key.code {
            KeyCode::Esc => {
                let outcome = self.wizard.reload();
                self.refresh_all();
                self.view = View::Wizard;
                if matches!(outcome, LoadOutcome::Discarded { .. }) {
                    self.report_load(&outcome);
                }
            }
            KeyCode::Tab | KeyCode::Down => adjust_index(len, &mut self.sign_in.focus, 1),
            KeyCode::BackTab | KeyCode::Up => adjust_index(len, &mut self.sign_in.focus, -1),
            KeyCode::Enter => {
                if validation::is_valid_email(self.sign_in.email()) {
                    self.toast(ToastKind::Info, SIGN_IN_OFFLINE.into(), now);
                } else {
                    self.show_errors(
                        &ValidationErrors::single("Please enter a valid email address"),
                        now,
                    );
                }
            }
            _ => {
                let focus = self.sign_in.focus;
                self.sign_in.fields[focus].handle_key(key);
            }
        }
    }

    // ------------------------------------------------------------------
    // Feedback
    // ------------------------------------------------------------------

    fn refresh_all(&mut self) {
        for step in Step::all() {
            self.refresh_form(*step);
        }
    }

    fn show_errors(&mut self, errors: &ValidationErrors, now: Instant) {
        self.toasts.push(
            ToastKind::Error,
            errors.messages().to_vec(),
            now,
            self.config.error_toast(),
        );
    }

    fn toast(&mut self, kind: ToastKind, message: String, now: Instant) {
        let ttl = match kind {
            ToastKind::Success | ToastKind::Info => self.config.success_toast(),
            ToastKind::Error | ToastKind::Warning => self.config.error_toast(),
        };
        self.toasts.push(kind, vec![message], now, ttl);
    }

    fn warn_storage(&mut self, now: Instant) {
        self.toast(
            ToastKind::Warning,
            "Progress could not be saved; it will be lost when you quit".to_string(),
            now,
        );
    }
}
