use super::super::wizard_app::App;
use aerial_core::{Step, StepStatus};

pub(super) fn build_step_sidebar(app: &App) -> String {
    Step::all()
        .iter()
        .map(|step| {
            let marker = match app.wizard.step_status(*step) {
                StepStatus::Completed => "✓",
                StepStatus::Active => "▶",
                StepStatus::Pending => " ",
            };
            format!("{} F{} {}", marker, step.number(), step.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerial_core::config::WizardConfig;
    use aerial_core::state_manager::MemoryStore;
    use aerial_core::WizardState;

    #[test]
    fn markers_follow_current_step() {
        let mut wizard = WizardState::new(Box::new(MemoryStore::new()));
        wizard.jump_to(Step::Members);
        let app = App::new(wizard, WizardConfig::default());
        let sidebar = build_step_sidebar(&app);
        let lines: Vec<&str> = sidebar.lines().collect();
        assert_eq!(lines[0], "✓ F1 Create Your Account");
        assert_eq!(lines[2], "▶ F3 Invite Members");
        assert_eq!(lines[4], "  F5 Complete Sign In");
    }
}
