use crate::application::{App, AppMode};
use crate::domain::{AppState, ScreenIntent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_screen(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "appflow - App Flow Demo | Screen: {}",
        app.manager.app_state().title()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_screen(f: &mut Frame, app: &App, area: Rect) {
    let state = app.manager.app_state();
    let blurb = match state {
        AppState::Onboarding => {
            "Welcome! This walkthrough stands in for real onboarding content."
        }
        AppState::Paywall => "Your subscription has expired. Pay to unlock the app.",
        AppState::App => "You are in. This screen stands in for the real app.",
    };

    let mut lines = vec![String::new(), format!("  {}", blurb), String::new()];
    for (i, intent) in ScreenIntent::for_state(state).iter().enumerate() {
        lines.push(format!("  [{}] {}", i + 1, intent.label()));
    }

    let screen = Paragraph::new(lines.join("\n"))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(state.title())
                .style(screen_style(state)),
        );
    f.render_widget(screen, area);
}

fn screen_style(state: AppState) -> Style {
    match state {
        AppState::Onboarding => Style::default().fg(Color::Cyan),
        AppState::Paywall => Style::default().fg(Color::Yellow),
        AppState::App => Style::default().fg(Color::Green),
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                let actions = ScreenIntent::for_state(app.manager.app_state()).len();
                format!(
                    "Payment: {} | Onboarded: {} | 1-{}: actions | F1/?: help | q: quit",
                    app.manager.payment_status().label(),
                    app.manager.is_onboarded(),
                    actions
                )
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help"
            .to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("appflow Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"APPFLOW REFERENCE

=== SCREENS ===
Onboarding      First-launch walkthrough; finish it to move on
Paywall         Shown while the subscription is expired
Main App        Shown while the subscription is paid

=== ROUTING RULES ===
Finish Onboarding   Goes to Main App when paid, Paywall when expired
Pay                 Marks the subscription paid, enters Main App
Expire Payment      Marks the subscription expired, returns to Paywall
Reset Onboarding    Returns to Onboarding from anywhere

=== KEYS ===
1..2            Trigger the actions listed on the current screen
F1 or ?         Show this help
q               Quit (from the normal screen)

=== STORAGE ===
The three flow flags (screen, payment status, onboarding flag) are
stored in a small JSON preferences file and reloaded on the next
launch. Pass a path as the first argument to use a different file;
the default is "appflow.json" in the working directory.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
        .to_string()
}
