/*
[INPUT]:  LogBufferHandle snapshots for UI
[OUTPUT]: Log panel rendered into Ratatui frame
[POS]:    TUI UI logs panel rendering
[UPDATE]: When log panel layout changes
*/

use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::LogBufferHandle;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
) {
    let available = area.height.saturating_sub(2) as usize;
    let lines = {
        let guard = buffer.lock().expect("log buffer lock");
        guard.tail(available)
    };

    let text = lines
        .into_iter()
        .map(|line| Line::from(Span::raw(line)))
        .collect::<Vec<_>>();
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Logs"),
    );
    frame.render_widget(log_widget, area);
}
