use super::content::{build_info_panel, build_step_lines, expected_actions, status_message};
use super::sidebar::build_step_sidebar;
use super::super::wizard_app::{App, View};
use crate::widgets::gauge_percent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout: Title | Main Body | Progress Bar | Key Legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Main body (3-panel)
                Constraint::Length(3), // Progress bar
                Constraint::Length(4), // Key legend
            ]
            .as_ref(),
        )
        .split(f.area());

    let title_line = Line::from(vec![
        Span::styled("Red Aerial Systems", Style::default().fg(Color::Red)),
        Span::raw(" | "),
        Span::styled("Sign Up", Style::default().fg(Color::White)),
    ]);
    let title = Block::default().borders(Borders::ALL).title(title_line);
    f.render_widget(title, main_chunks[0]);

    // Three-panel layout: Sidebar | Content | Info Panel
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(25), // Left: Step indicator
                Constraint::Percentage(50), // Center: Current form
                Constraint::Percentage(25), // Right: Progress and toasts
            ]
            .as_ref(),
        )
        .split(main_chunks[1]);

    let sidebar = Paragraph::new(build_step_sidebar(app))
        .block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(sidebar, body_chunks[0]);

    let content_title = match app.view {
        View::Wizard => app.current_step().title(),
        View::SignIn => "Sign In",
    };
    let list_items = build_step_lines(app)
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let content =
        List::new(list_items).block(Block::default().borders(Borders::ALL).title(content_title));
    f.render_widget(content, body_chunks[1]);

    let info_panel = Paragraph::new(build_info_panel(app))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Info"));
    f.render_widget(info_panel, body_chunks[2]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Red))
        .label(app.wizard.progress_text())
        .percent(gauge_percent(app.wizard.progress_percent()));
    f.render_widget(gauge, main_chunks[2]);

    let legend_text = format!("{}\n{}", status_message(app), expected_actions(app));
    let legend =
        Paragraph::new(legend_text).block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[3]);

    if let Some(modal) = &app.completion {
        let area = centered_rect(60, 50, f.area());
        let body = Paragraph::new(modal.lines.join("\n"))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Registration Complete"),
            );
        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}

/// A rectangle of `percent_x` by `percent_y` centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
