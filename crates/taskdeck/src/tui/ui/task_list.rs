/*
[INPUT]:  Session tasks, per-row expansion state, list selection, labels
[OUTPUT]: Task list with expandable rows rendered into Ratatui frame
[POS]:    TUI UI task list screen
[UPDATE]: When row layout or expansion rendering changes
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem};
use taskdeck_core::{RowState, Task};
use unicode_width::UnicodeWidthStr;

use taskdeck::Labels;

use crate::tui::app::{AppState, display_name};
use crate::tui::runtime::border_style;

const HIGHLIGHT_SYMBOL: &str = "> ";

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let tasks = app.session.tasks();
    // borders plus highlight symbol
    let row_width = (area.width as usize).saturating_sub(2 + HIGHLIGHT_SYMBOL.width());

    let items = if tasks.is_empty() {
        vec![ListItem::new(Span::styled(
            app.labels.empty_list.as_str(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let row = app.session.rows().get(index).copied().unwrap_or_default();
                ListItem::new(row_text(task, &row, &app.labels, row_width))
            })
            .collect()
    };

    let title = format!("{} ({})", app.labels.list_title, tasks.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn row_text<'a>(task: &'a Task, row: &RowState, labels: &'a Labels, width: usize) -> Text<'a> {
    let (marker, affordance) = if row.expanded() {
        ("▴ ", labels.show_less.as_str())
    } else {
        ("▾ ", labels.show_more.as_str())
    };

    let prefix = format!("{} ", labels.task_prefix);
    let name = display_name(task.name());
    let used = prefix.width() + name.width() + marker.width() + affordance.width();
    let gap = width.saturating_sub(used).max(1);

    let mut lines = vec![Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(affordance, Style::default().fg(Color::Cyan)),
    ])];

    if row.expanded() && task.has_detail() {
        lines.extend(
            task.detail()
                .lines()
                .map(|line| Line::from(format!("    {line}"))),
        );
    }
    lines.extend((0..row.padding()).map(|_| Line::default()));

    Text::from(lines)
}
