// Member modal rendering.
// Draws the member detail dialog over the dimmed portfolio page.

use ratatui::{prelude::*, widgets::*};

use crate::state::{MemberModal, ModalLayout};

/// Draw the member modal on top of the current view.
pub fn draw_member_modal(frame: &mut Frame, modal: &MemberModal) {
    let area = frame.area();
    let layout = ModalLayout::centered(area);

    // Dim the overlay, then clear the area behind the panel
    frame.render_widget(
        Block::default().style(Style::default().fg(Color::DarkGray)),
        area,
    );
    frame.render_widget(Clear, layout.panel);

    let fields = modal.fields();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Team Member ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Role
            Constraint::Length(1), // Image
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Bio
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let name = Paragraph::new(Span::styled(
        fields.name.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(name, chunks[0]);

    let role = Paragraph::new(Span::styled(
        fields.role.as_str(),
        Style::default().fg(Color::Cyan),
    ));
    frame.render_widget(role, chunks[1]);

    let image = Paragraph::new(Line::from(vec![
        Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
        Span::raw(fields.image_src.as_str()),
        Span::styled(
            format!(" ({})", fields.image_alt),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(image, chunks[2]);

    let bio = Paragraph::new(fields.bio.as_str()).wrap(Wrap { trim: true });
    frame.render_widget(bio, chunks[4]);

    let instructions = Line::from(vec![
        Span::styled(" Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled("x", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Click outside", Style::default().fg(Color::Yellow)),
        Span::styled(" = Close ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[5],
    );

    let close = Paragraph::new(Span::styled(
        "[ x ]",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(close, layout.close_button);
}
