use aerial_core::config::WizardConfig;
use aerial_core::state_manager::{FileStore, STORAGE_KEY};
use aerial_core::{LoadOutcome, Step, WizardState};
use aerial_tui::wizard::{dump_step, App, InputResult};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::path::Path;
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_input(key(KeyCode::Char(c)));
    }
}

fn open_app(dir: &Path) -> (App, LoadOutcome) {
    let mut wizard = WizardState::new(Box::new(FileStore::new(dir)));
    let outcome = wizard.load();
    (App::new(wizard, WizardConfig::default()), outcome)
}

#[test]
fn keyboard_flow_saves_each_step_and_completes() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("passport.pdf");
    std::fs::write(&doc, vec![0u8; 2048]).unwrap();

    let (mut app, outcome) = open_app(dir.path());
    assert_eq!(outcome, LoadOutcome::Fresh);

    // Step 1: account
    type_text(&mut app, "Jo");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "jo@x.com");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "Abcdef12");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "Abcdef12");
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), Step::Profile);

    // Step 2: profile (name pre-filled)
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "555-1234");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "Pilot");
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Right));
    app.handle_input(key(KeyCode::Right));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), Step::Members);

    // Step 3: one member, then empty Enter to continue
    type_text(&mut app, "sam@x.com");
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), Step::Documents);

    // Step 4: attach the ID proof, then Continue
    type_text(&mut app, &doc.to_string_lossy());
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(
        app.documents.entries[0].detail.as_deref(),
        Some("passport.pdf (0.00 MB)")
    );
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), Step::Review);

    let saved = std::fs::read_to_string(dir.path().join(format!("{}.json", STORAGE_KEY))).unwrap();
    assert!(saved.contains("\"department\":\"Engineering\""));
    assert!(saved.contains("\"documents\":[\"passport.pdf\"]"));
    assert!(saved.contains("\"isComplete\":false"));

    // A fresh session restores the record but starts at step 1.
    let (restored, outcome) = open_app(dir.path());
    assert_eq!(outcome, LoadOutcome::Restored);
    assert_eq!(restored.current_step(), Step::Account);
    assert_eq!(restored.wizard.record().members, vec!["sam@x.com".to_string()]);

    // Step 5: complete, then let the summary close itself.
    let now = Instant::now();
    app.handle_input_at(key(KeyCode::Enter), now);
    let modal = app.completion.as_ref().unwrap();
    assert!(modal.lines.contains(&"  Team Members: 1 invited".to_string()));
    app.tick(now + Duration::from_secs(10));
    assert!(app.completion.is_none());
    assert_eq!(app.current_step(), Step::Account);
    assert!(!dir.path().join(format!("{}.json", STORAGE_KEY)).exists());

    assert_eq!(
        app.handle_input(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }),
        InputResult::Quit
    );
}

#[test]
fn corrupt_saved_progress_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", STORAGE_KEY)), "{not json").unwrap();
    let (app, outcome) = open_app(dir.path());
    assert!(matches!(outcome, LoadOutcome::Discarded { .. }));
    assert_eq!(app.wizard.record().account.name, "");
}

#[test]
fn dump_covers_every_step() {
    let config = WizardConfig::default();
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _) = open_app(dir.path());
    for step in Step::all() {
        let step = app.wizard.jump_to(*step);
        app.refresh_form(step);
        let dump = dump_step(&app);
        assert!(dump.starts_with(&format!("STEP: {}", step.title())));
        assert!(dump.contains(&format!("Progress: {}%", step.number() as u32 * 20)));
    }
    assert!(aerial_tui::wizard::dump_all_steps(&config).is_ok());
}
