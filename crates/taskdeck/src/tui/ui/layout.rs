/*
[INPUT]:  Active Screen
[OUTPUT]: Screen breadcrumb bar rendered into Ratatui frame
[POS]:    TUI UI header
[UPDATE]: When screens are added or renamed
*/

use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};
use taskdeck_core::Screen;

use crate::tui::runtime::{border_style, header_style};

const SCREENS: [Screen; 3] = [Screen::Onboarding, Screen::List, Screen::AddForm];

pub(in crate::tui) fn draw_header(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current: Screen,
) {
    let titles = SCREENS
        .iter()
        .map(|screen| Line::from(screen.title()))
        .collect::<Vec<_>>();
    let selected = SCREENS
        .iter()
        .position(|screen| *screen == current)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("taskdeck"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}
