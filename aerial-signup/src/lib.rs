use aerial_core::cli::{Cli, Command};
use aerial_core::config::WizardConfig;
use aerial_core::state_manager::FileStore;
use aerial_core::{summary, LoadOutcome, Step, WizardState};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::Path;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    aerial_core::logging::init_with(Some(cli.resolved_log_file()));

    let config = WizardConfig::resolve(cli.config.as_deref(), &cli.data_dir)?;

    if cli.dump_tui {
        aerial_tui::wizard::dump_all_steps(&config)?;
        return Ok(());
    }

    match &cli.command {
        // No subcommand = launch the wizard (default)
        None => {
            log::info!("🚀 Launching signup wizard...");
            let mut wizard = open_wizard(&cli.data_dir, &config);
            let outcome = wizard.load();
            let mut app = aerial_tui::wizard::App::new(wizard, config);
            app.report_load(&outcome);
            aerial_tui::wizard::run(&mut app)?;
        }
        Some(Command::Status) => {
            let stdout = std::io::stdout();
            print_status(&mut stdout.lock(), &cli.data_dir, &config)?;
        }
        Some(Command::Reset) => {
            if reset(&cli.data_dir, &config)? {
                println!("Saved signup progress deleted.");
            } else {
                println!("No saved signup progress.");
            }
        }
    }

    Ok(())
}

fn open_wizard(data_dir: &Path, config: &WizardConfig) -> WizardState {
    WizardState::with_key(Box::new(FileStore::new(data_dir)), &config.storage_key)
}

/// Write saved progress to `out`. Passwords are redacted.
pub fn print_status(
    out: &mut impl Write,
    data_dir: &Path,
    config: &WizardConfig,
) -> anyhow::Result<()> {
    let mut wizard = open_wizard(data_dir, config);
    match wizard.load() {
        LoadOutcome::Fresh => {
            writeln!(out, "No saved signup progress in {}", data_dir.display())?;
        }
        LoadOutcome::Discarded { reason } => {
            writeln!(out, "Saved signup progress is unreadable: {}", reason)?;
        }
        LoadOutcome::Restored => {
            let saved = FileStore::new(data_dir).path_for(&config.storage_key);
            writeln!(out, "Saved signup progress ({})", saved.display())?;
            for step in [Step::Account, Step::Profile] {
                let state = match wizard.validate_step(step.number()) {
                    Ok(()) => "ready".to_string(),
                    Err(errors) => format!("{} issue(s)", errors.len()),
                };
                writeln!(out, "  Step {} ({}): {}", step.number(), step.label(), state)?;
            }
            for line in summary::status_lines(wizard.record()) {
                writeln!(out, "  {}", line)?;
            }
        }
    }
    Ok(())
}

/// Delete saved progress. Returns whether anything was stored.
pub fn reset(data_dir: &Path, config: &WizardConfig) -> anyhow::Result<bool> {
    let store = FileStore::new(data_dir);
    let path = store.path_for(&config.storage_key);
    if !path.exists() {
        return Ok(false);
    }
    let mut wizard = WizardState::with_key(Box::new(store), &config.storage_key);
    wizard
        .acknowledge_completion()
        .with_context(|| format!("Failed to delete {}", path.display()))?;
    log::info!("🧹 Reset saved signup progress in {}", data_dir.display());
    Ok(true)
}
