/*
[INPUT]:  Config labels
[OUTPUT]: Welcome screen with a single continue action
[POS]:    TUI UI onboarding screen
[UPDATE]: When onboarding copy or layout changes
*/

use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use taskdeck::Labels;

use crate::tui::runtime::{border_style, key_style};

pub(in crate::tui) fn draw_onboarding(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    labels: &Labels,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, content, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let lines = vec![
        Line::from(Span::styled(
            labels.onboarding_title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("[ {} ]", labels.continue_label),
            key_style(),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, content);
}
