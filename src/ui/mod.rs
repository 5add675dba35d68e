// UI module for rendering the TUI.
// Contains widgets for the view bar, both pages, the member modal and help.

mod help;
mod modal;
mod portfolio;
mod quote;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::View;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.hit.screen = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // View bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);

    match app.navigator.current() {
        View::Portfolio => portfolio::draw_portfolio(frame, app, chunks[1]),
        View::App => quote::draw_quote_app(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);

    if app.modal.is_open() {
        modal::draw_member_modal(frame, &app.modal);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        help::draw_help_overlay(frame);
    }
}

/// Draw the status bar with keybinding hints and quote freshness.
#[allow(clippy::collapsible_if)]
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = if app.modal.is_open() {
        vec![
            Span::raw(" Esc "),
            Span::styled("Close", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        match app.navigator.current() {
            View::Portfolio => vec![
                Span::raw(" ↑↓ "),
                Span::styled("Select", Style::default().fg(Color::DarkGray)),
                Span::raw("  ↵ "),
                Span::styled("Open", Style::default().fg(Color::DarkGray)),
                Span::raw("  a "),
                Span::styled("Quotes", Style::default().fg(Color::DarkGray)),
                Span::raw("  ? "),
                Span::styled("Help", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
            View::App => vec![
                Span::raw(" n "),
                Span::styled("New quote", Style::default().fg(Color::DarkGray)),
                Span::raw("  b "),
                Span::styled("Back", Style::default().fg(Color::DarkGray)),
                Span::raw("  ? "),
                Span::styled("Help", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
        }
    };

    if app.navigator.current() == View::App {
        if let Some(fetched_at) = &app.quote.fetched_at {
            hints.push(Span::styled(
                format!("  Fetched {}", quote::format_relative_time(fetched_at)),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
