use super::super::wizard_app::{AccountForm, App, ProfileForm, View};
use crate::input::InputField;
use aerial_core::summary;
use aerial_core::validation::is_valid_email;
use aerial_core::Step;

fn field_line(field: &InputField, focused: bool, reveal: bool) -> String {
    let marker = if focused { "▶" } else { " " };
    format!("{} {}: {}", marker, field.label, field.display(reveal, focused))
}

/// Live marker next to an email field; nothing until something is typed.
fn email_marker(email: &str) -> &'static str {
    if email.is_empty() {
        ""
    } else if is_valid_email(email) {
        "  ✓"
    } else {
        "  ✗"
    }
}

pub(super) fn build_step_lines(app: &App) -> Vec<String> {
    if app.view == View::SignIn {
        return build_sign_in_lines(app);
    }

    let step = app.current_step();
    let mut lines = vec![
        format!("🧭 Step {} of {}: {}", step.number(), Step::TOTAL, step.title()),
        step.description().to_string(),
        String::new(),
    ];
    let reveal = app.password_visible;

    match step {
        Step::Account => {
            let form = &app.account;
            for (i, field) in form.fields.iter().enumerate() {
                let mut line = field_line(field, form.focus == i, reveal);
                if i == AccountForm::EMAIL {
                    line.push_str(email_marker(form.email()));
                }
                lines.push(line);
            }
        }
        Step::Profile => {
            let form = &app.profile;
            for (i, field) in form.fields.iter().enumerate() {
                if i == ProfileForm::PHOTO {
                    lines.push(match &form.photo_detail {
                        Some(detail) => format!("  ✓ {}", detail),
                        None => "  No photo".to_string(),
                    });
                }
                lines.push(field_line(field, form.focus == i, reveal));
            }
            let department = form
                .department
                .and_then(|i| app.config.departments.get(i))
                .map(String::as_str)
                .unwrap_or("Select department");
            let marker = if form.focus == ProfileForm::DEPARTMENT {
                "▶"
            } else {
                " "
            };
            lines.push(format!("{} Department: ◀ {} ▶", marker, department));
        }
        Step::Members => {
            let form = &app.members;
            lines.push(field_line(&form.input, true, reveal));
            lines.push(String::new());
            if form.roster.is_empty() {
                lines.push("  (no members invited yet)".to_string());
            }
            for (i, member) in form.roster.members().iter().enumerate() {
                let marker = if i == form.selected { "»" } else { " " };
                lines.push(format!("  {} {}", marker, member));
            }
        }
        Step::Documents => {
            let form = &app.documents;
            for (i, entry) in form.entries.iter().enumerate() {
                let focused = form.focus == i;
                let status = match &entry.detail {
                    Some(detail) => format!("✓ {}", detail),
                    None => format!("Upload {}", entry.slot.label()),
                };
                lines.push(format!("  {}", status));
                lines.push(field_line(&entry.path, focused, reveal));
            }
            let marker = if form.on_continue() { "▶" } else { " " };
            lines.push(format!("{} [ Continue ]", marker));
        }
        Step::Review => {
            lines.extend(summary::review_lines(app.wizard.record()));
            lines.push(String::new());
            lines.push("▶ [ Complete Setup ]".to_string());
        }
    }
    lines
}

fn build_sign_in_lines(app: &App) -> Vec<String> {
    let form = &app.sign_in;
    let mut lines = vec![
        "🔑 Sign In".to_string(),
        "Welcome back to Red Aerial Systems.".to_string(),
        String::new(),
    ];
    for (i, field) in form.fields.iter().enumerate() {
        let mut line = field_line(field, form.focus == i, app.password_visible);
        if i == 0 {
            line.push_str(email_marker(form.email()));
        }
        lines.push(line);
    }
    lines.push(String::new());
    lines.push("Don't have an account? Press Esc to sign up.".to_string());
    lines
}

pub(super) fn build_info_panel(app: &App) -> String {
    let mut lines = vec![
        format!("📈 {}", app.wizard.progress_text()),
        format!(
            "🔒 Passwords: {}",
            if app.password_visible { "shown" } else { "hidden" }
        ),
        String::new(),
    ];
    lines.extend(app.toasts.render_lines());
    lines.join("\n")
}

pub(super) fn expected_actions(app: &App) -> &'static str {
    if app.completion.is_some() {
        return "Enter/Esc: Close | Ctrl+C: Quit";
    }
    if app.view == View::SignIn {
        return "Tab: Next field | Enter: Sign in | Esc: Sign up | Ctrl+P: Show password | Ctrl+C: Quit";
    }
    match app.current_step() {
        Step::Account => {
            "Tab: Next field | Enter: Continue | F1-F5: Jump | Ctrl+P: Show password | Ctrl+L: Sign in | Ctrl+C: Quit"
        }
        Step::Profile => {
            "Tab: Next field | Enter: Attach photo / Continue | Del: Clear photo | ←/→: Department | Esc: Back | Ctrl+C: Quit"
        }
        Step::Members => {
            "Enter: Add member (empty: Continue) | ↑/↓: Select | Del: Remove | Esc: Back | Ctrl+C: Quit"
        }
        Step::Documents => {
            "Tab: Next | Enter: Attach file / Continue | Esc: Back | F1-F5: Jump | Ctrl+C: Quit"
        }
        Step::Review => "Enter: Complete setup | Esc: Back | F1-F5: Jump | Ctrl+C: Quit",
    }
}

pub(super) fn status_message(app: &App) -> String {
    if app.completion.is_some() {
        return "🎉 Signup complete".to_string();
    }
    match app.view {
        View::SignIn => "🔑 Sign in".to_string(),
        View::Wizard => format!(
            "🧭 {} ({})",
            app.current_step().label(),
            app.wizard.progress_text()
        ),
    }
}
