use super::super::wizard_app::App;
use super::content::{build_info_panel, build_step_lines, expected_actions, status_message};
use super::sidebar::build_step_sidebar;
use crate::widgets::gauge_percent;

/// Plain-text rendering of the current screen, for headless inspection.
pub fn dump_step(app: &App) -> String {
    let lines = build_step_lines(app);
    let hint = lines
        .first()
        .cloned()
        .unwrap_or_else(|| "🧭 Step: (unknown)".to_string());
    let body = if lines.len() > 1 {
        lines[1..].join("\n")
    } else {
        "(no body content)".to_string()
    };

    format!(
        "STEP: {}\n\n- Header: Red Aerial Systems | Sign Up\n- Hint line: {}\n- Steps:\n{}\n- Body contents:\n{}\n- Info:\n{}\nProgress: {}%\nStatus: {}\n- Expected user actions (keys): {}\n",
        app.current_step().title(),
        hint,
        build_step_sidebar(app),
        body,
        build_info_panel(app),
        gauge_percent(app.wizard.progress_percent()),
        status_message(app),
        expected_actions(app)
    )
}
