pub mod menu;
pub mod popup;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use labcore::dims::Dims;
use unicode_width::UnicodeWidthStr;

pub use menu::run_menu;
pub use popup::popup;

/// Position of a box of `box_size` centered in the given container.
pub fn box_center(container_pos: Dims, container_size: Dims, box_size: Dims) -> Dims {
    Dims(
        container_pos.0 + (container_size.0 - box_size.0) / 2,
        container_pos.1 + (container_size.1 - box_size.1) / 2,
    )
}

pub fn box_center_screen(screen: Dims, box_size: Dims) -> Dims {
    box_center(Dims::ZERO, screen, box_size)
}

pub fn text_width(text: &str) -> i32 {
    text.width() as i32
}

pub fn format_duration(dur: Duration) -> String {
    format!(
        "{}m{:.1}s",
        dur.as_secs() / 60,
        (dur.as_secs() % 60) as f32 + dur.subsec_millis() as f32 / 1000f32,
    )
}

/// Key presses only, repeats and releases are skipped.
pub fn key_press(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Some(*code),
        _ => None,
    }
}

/// Next event if one arrives within `timeout`.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
