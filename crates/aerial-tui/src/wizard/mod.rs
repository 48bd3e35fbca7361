//! The signup wizard screen (ratatui).
//!
//! - One form per step with a step indicator sidebar
//! - Toasts for validation errors and storage warnings
//! - Completion summary that clears saved progress when closed

mod wizard_app;
mod wizard_ui;

pub use wizard_app::{App, CompletionModal, InputResult, View};
pub use wizard_ui::dump_step;

use aerial_core::config::WizardConfig;
use aerial_core::state_manager::MemoryStore;
use aerial_core::{Step, WizardState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the wizard until the user quits.
pub fn run(app: &mut App) -> Result<()> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "No TTY detected. The signup wizard requires an interactive terminal.\n\
             Use `aerial-signup status` or `--dump-tui` for non-interactive output."
        );
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| wizard_ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_input(key) == InputResult::Quit {
                    log::info!("Signup wizard closed at step {}", app.current_step().number());
                    return Ok(());
                }
            }
        }
    }
}

/// Log a text rendering of every step.
pub fn dump_all_steps(config: &WizardConfig) -> Result<()> {
    let wizard = WizardState::with_key(Box::new(MemoryStore::new()), &config.storage_key);
    let mut app = App::new(wizard, config.clone());
    for step in Step::all() {
        let step = app.wizard.jump_to(*step);
        app.refresh_form(step);
        log::info!("{}", dump_step(&app));
    }
    Ok(())
}
