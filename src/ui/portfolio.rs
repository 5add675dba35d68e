// Portfolio page rendering.
// Team introduction, member cards and the button into the quote generator.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

const ABOUT: &str = "We are a small team learning to build things for the web, one \
    feature at a time. This page introduces the people behind the project. \
    Select a member card to read more about them, or launch the quote \
    generator to pull a random quote from the internet.";

/// Draw the portfolio page and record its clickable regions.
pub fn draw_portfolio(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // About
            Constraint::Min(3),    // Member cards
            Constraint::Length(3), // Launch button
        ])
        .split(area);

    let about = Paragraph::new(ABOUT)
        .wrap(Wrap { trim: true })
        .scroll((app.navigator.scroll.offset, 0))
        .block(Block::default().borders(Borders::ALL).title(" About Us "));
    frame.render_widget(about, chunks[0]);

    let members_block = Block::default().borders(Borders::ALL).title(" Our Team ");
    app.hit.members = members_block.inner(chunks[1]);

    if app.roster.is_empty() {
        let empty = Paragraph::new("No members yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(members_block);
        frame.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = app
            .roster
            .members()
            .iter()
            .map(|member| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        member.name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::styled(member.role.clone(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let list_widget = List::new(items)
            .block(members_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list_widget, chunks[1], &mut app.roster.list_state);
    }

    let launch = Paragraph::new(Line::from(vec![
        Span::styled("Launch the Quote Generator", Style::default().fg(Color::Yellow)),
        Span::styled("  (a)", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    app.hit.launch_button = chunks[2];
    frame.render_widget(launch, chunks[2]);
}
