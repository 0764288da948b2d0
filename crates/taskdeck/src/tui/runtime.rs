/*
[INPUT]:  TaskdeckConfig, session change notifications, crossterm input, log buffer
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use taskdeck_core::Screen;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::fmt::MakeWriter;

use taskdeck::TaskdeckConfig;

use super::app::AppState;
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::{draw_add_form, draw_header, draw_logs, draw_onboarding, draw_task_list};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Up to `count` most recent lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        let start = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(start).cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        let mut guard = self.buffer.lock().expect("log buffer lock");
        guard.push_line(line);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial.drain(..=pos);
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run_tui_with_log(config: TaskdeckConfig, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = AppState::new(&config, log_buffer);
    let mut screen_rx = app.session.subscribe_screen();
    let mut tasks_rx = app.session.subscribe_tasks();

    let mut tick = tokio::time::interval(config.tick_interval());
    let mut should_quit = false;
    info!(tick_ms = config.ui.tick_ms, "tui started");

    let mut needs_redraw = true;
    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {
                needs_redraw |= app.on_tick();
            }
            Ok(()) = screen_rx.changed() => {
                let screen = *screen_rx.borrow_and_update();
                app.on_screen_changed(screen);
                needs_redraw = true;
            }
            Ok(()) = tasks_rx.changed() => {
                let revision = *tasks_rx.borrow_and_update();
                app.on_tasks_changed(revision);
                needs_redraw = true;
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_key_event(&mut app, key) {
                            should_quit = true;
                        }
                        needs_redraw = true;
                    }
                    Some(UiEvent::Input(CrosstermEvent::Resize(width, height))) => {
                        debug!(width, height, "terminal resized; session kept");
                        needs_redraw = true;
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        if needs_redraw && !should_quit {
            terminal.draw(|frame| draw_ui(frame, &mut app))?;
            needs_redraw = false;
        }
    }

    input_shutdown.cancel();
    info!(tasks = app.session.tasks().len(), "tui stopped");
    Ok(())
}

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(4),
    ])
    .areas(area);

    draw_header(frame, header_area, app.screen());

    let screen_area = if app.show_logs {
        let [screen_area, logs_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);
        draw_logs(frame, logs_area, &app.log_buffer);
        screen_area
    } else {
        body_area
    };

    match app.screen() {
        Screen::Onboarding => draw_onboarding(frame, screen_area, &app.labels),
        Screen::List => draw_task_list(frame, screen_area, app),
        Screen::AddForm => draw_add_form(frame, screen_area, app),
    }

    draw_footer(frame, footer_area, app);
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = key_style();
    let hotkeys: &[(&str, &str)] = match app.screen() {
        Screen::Onboarding => &[("[Enter]", " Continue  "), ("[q]", " Quit  ")],
        Screen::List => &[
            ("[Up/Down]", " Select  "),
            ("[Enter]", " Expand  "),
            ("[a]", " Add  "),
            ("[L/F2]", " Logs  "),
            ("[q]", " Quit  "),
        ],
        Screen::AddForm => &[
            ("[Tab]", " Next field  "),
            ("[Enter]", " Submit  "),
            ("[Esc]", " Cancel  "),
        ],
    };

    let line1 = Line::from(
        hotkeys
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
            .collect::<Vec<_>>(),
    );
    let line2 = Line::from(Span::raw(format!("Status: {}", app.status_message)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let widget = Paragraph::new(Text::from(vec![line1, line2]))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn focused_border_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
