#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

const TICK_MILLIS: u64 = 500;

/// Maps a key press to what the chat window does with it. Anything without a
/// binding goes to the question box.
fn key_event(input: Input) -> Event {
    match (input.key.clone(), input.ctrl) {
        (Key::Enter, _) => return Event::KeyboardEnter(),
        (Key::Char('c'), true) => return Event::KeyboardCTRLC(),
        (Key::Up, _) => return Event::UIScrollUp(),
        (Key::Down, _) => return Event::UIScrollDown(),
        (Key::PageUp, _) | (Key::Char('u'), true) => return Event::UIScrollPageUp(),
        (Key::PageDown, _) | (Key::Char('d'), true) => return Event::UIScrollPageDown(),
        _ => return Event::KeyboardCharInput(input),
    }
}

fn terminal_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => return Some(Event::UIScrollUp()),
            MouseEventKind::ScrollDown => return Some(Event::UIScrollDown()),
            _ => return None,
        },
        // Windows reports releases too.
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Release => return None,
        CrosstermEvent::Key(key) => return Some(key_event(key.into())),
        _ => return None,
    }
}

/// Merges terminal input, worker events and a redraw tick into one stream
/// for the UI loop.
pub struct EventsService {
    terminal_events: EventStream,
    worker_events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(worker_events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            terminal_events: EventStream::new(),
            worker_events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.worker_events.recv() => event,
                event = self.terminal_events.next() => match event {
                    Some(Ok(input)) => terminal_event(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = ?err, "Terminal event error");
                        None
                    },
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(TICK_MILLIS)) => Some(Event::UITick())
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
