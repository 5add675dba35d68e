// View bar rendering.
// Shows which of the two pages is active.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::View;

/// Draw the view bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let views = [View::Portfolio, View::App];
    let active = app.navigator.current();

    let titles: Vec<Line> = views
        .iter()
        .map(|view| {
            let style = if *view == active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(view.title(), style))
        })
        .collect();

    let selected_index = views.iter().position(|v| *v == active).unwrap_or(0);

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" The Quote Collective ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
