/*
[INPUT]:  Session add-task form (name/detail inputs, focus), labels
[OUTPUT]: Add-task form rendered into Ratatui frame with cursor placement
[POS]:    TUI UI add-task screen
[UPDATE]: When form fields or form layout change
*/

use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use taskdeck_core::{AddTaskForm, FormField, Input};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, centered_rect, focused_border_style, key_style};

pub(in crate::tui) fn draw_add_form(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let Some(form) = app.session.form() else {
        return;
    };
    let labels = &app.labels;

    let popup = centered_rect(area, 70, 80);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(labels.form_title.as_str());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [name_area, detail_area, _, submit_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_input(frame, name_area, form, FormField::Name, labels.name_label.as_str());
    draw_input(frame, detail_area, form, FormField::Detail, labels.detail_label.as_str());

    let submit_style = if form.can_submit() {
        key_style()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let submit = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", labels.submit_label),
        submit_style,
    )))
    .alignment(Alignment::Right);
    frame.render_widget(submit, submit_area);
}

fn draw_input(
    frame: &mut ratatui::Frame,
    area: Rect,
    form: &AddTaskForm,
    field: FormField,
    label: &str,
) {
    let focused = form.focus() == field;
    let input = form.input(field);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title(label);
    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    let widget = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(block);
    frame.render_widget(widget, area);

    if focused {
        frame.set_cursor_position(cursor_position(inner, input, scroll));
    }
}

fn cursor_position(inner: Rect, input: &Input, scroll: usize) -> Position {
    let offset = input.visual_cursor().saturating_sub(scroll) as u16;
    Position::new(inner.x + offset.min(inner.width.saturating_sub(1)), inner.y)
}
