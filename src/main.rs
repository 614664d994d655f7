//! Notice Board - terminal presenter for the notice store
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - Store Layer (Tokio) - store actor owning notices and expiry timers

use std::io;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::watch;

use notice_board::constants::{APP_NAME, APP_VERSION};
use notice_board::messages::ui_events::key_to_ui_event;
use notice_board::ui::{render_notifications, render_toasts};
use notice_board::{BoardConfig, NoticeHandle, NoticeSnapshot, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// What the UI loop draws between snapshots
struct ViewState {
    snapshot: NoticeSnapshot,
    show_help: bool,
    seq: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BoardConfig::load();

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(version = APP_VERSION, ?config, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Spawn store actor
    let (handle, mut render_rx) = NoticeHandle::spawn();

    run_ui_loop(&mut terminal, &handle, &mut render_rx, &config).await?;

    handle.shutdown();
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    handle: &NoticeHandle,
    render_rx: &mut watch::Receiver<NoticeSnapshot>,
    config: &BoardConfig,
) -> anyhow::Result<()> {
    let mut view = ViewState {
        snapshot: NoticeSnapshot::default(),
        show_help: false,
        seq: 1,
    };

    loop {
        terminal.draw(|f| draw_ui(f, &view))?;

        // Poll for events with timeout
        if event::poll(config.tick_rate())? {
            if let Event::Key(key) = event::read()? {
                if let Some(ui_event) = key_to_ui_event(key, view.show_help) {
                    match ui_event {
                        UiEvent::Quit => break,
                        UiEvent::ToggleHelp => view.show_help = !view.show_help,
                        UiEvent::CloseHelp => view.show_help = false,
                        _ => {
                            if let Some(command) =
                                ui_event.to_command(&view.snapshot, view.seq, config.default_duration_ms)
                            {
                                view.seq += 1;
                                if !handle.dispatch(command) {
                                    anyhow::bail!("store actor stopped unexpectedly");
                                }
                            }
                        }
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        if render_rx.has_changed()? {
            view.snapshot = render_rx.borrow_and_update().clone();
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, view: &ViewState) {
    let area = f.area();
    let now = chrono::Utc::now();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" v{}", APP_VERSION), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), main_chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    f.render_widget(render_toasts(&view.snapshot.toasts, now), content[0]);
    f.render_widget(render_notifications(&view.snapshot.notifications, now), content[1]);

    draw_status_bar(f, main_chunks[2]);

    if view.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_status_bar(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(" 1-6:toast | p:pinned | n:notify | d:remove | x/X:clear | a:dismiss | ?:help | q:quit ")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 NOTICE BOARD - Keyboard Shortcuts

 TOASTS
   1..6               Create toast (primary .. danger)
   p                  Create toast that never expires
   d                  Remove oldest toast
   x                  Clear warning and danger toasts
   X                  Clear all toasts

 NOTIFICATIONS
   n                  Create notification
   a                  Dismiss all notifications

 GENERAL
   r                  Reset store
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
