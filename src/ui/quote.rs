// Quote generator rendering.
// Spinner, quote display region, error line and the two buttons.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{PLACEHOLDER_TEXT, QuoteDisplay, QuotePanel, UNAVAILABLE_TEXT};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Draw the quote generator page and record its clickable regions.
pub fn draw_quote_app(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Random Quote ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Display region / spinner
            Constraint::Length(1), // Error message
            Constraint::Length(3), // Buttons
        ])
        .split(inner);

    if app.quote.is_spinner_visible() {
        render_loading(frame, chunks[0]);
    }
    if app.quote.is_display_visible() {
        render_display(frame, &app.quote, chunks[0], app.navigator.scroll.offset);
    }

    if let Some(message) = app.quote.error_message() {
        let error = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[1]);
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let new_quote = button("New quote", "n", Color::Yellow);
    app.hit.quote_button = buttons[0];
    frame.render_widget(new_quote, buttons[0]);

    let back = button("Back to portfolio", "b", Color::DarkGray);
    app.hit.back_button = buttons[1];
    frame.render_widget(back, buttons[1]);
}

fn button<'a>(label: &'a str, key: &'a str, color: Color) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled(label, Style::default().fg(color)),
        Span::styled(format!("  ({})", key), Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}

/// Render the loading indicator.
fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("Fetching a quote...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render whatever the display region currently holds.
fn render_display(frame: &mut Frame, panel: &QuotePanel, area: Rect, scroll: u16) {
    let lines = match &panel.display {
        QuoteDisplay::Placeholder => vec![Line::from(Span::styled(
            PLACEHOLDER_TEXT,
            Style::default().fg(Color::DarkGray),
        ))],
        QuoteDisplay::Unavailable => vec![Line::from(Span::styled(
            UNAVAILABLE_TEXT,
            Style::default().fg(Color::DarkGray),
        ))],
        QuoteDisplay::Quote(quote) => vec![
            Line::from(Span::styled(
                quote.display_text(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                quote.attribution(),
                Style::default().fg(Color::Cyan),
            )),
        ],
    };

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::minutes(5))),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::hours(3))),
            "3h ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::days(2))),
            "2d ago"
        );
    }
}
