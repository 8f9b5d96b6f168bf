use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui, View};

/// Main event loop: redraw, then wait for a terminal event or a tick.
/// Single-threaded and synchronous per event; every input runs to completion
/// before the next draw.
pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // Tick drives notification expiry; nothing else is time-based.
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                            } else {
                                handle_key(app, key);
                            }
                        }
                        Event::Mouse(mouse) if app.view == View::Thread => match mouse.kind {
                            MouseEventKind::ScrollUp => app.thread_view.select_previous(3),
                            MouseEventKind::ScrollDown => app.thread_view.select_next(3),
                            _ => {}
                        },
                        // The next draw picks up the new size; the thread
                        // view re-clamps its offset against it.
                        Event::Resize(..) => {}
                        _ => {}
                    }
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }
    Ok(())
}
