use crossterm::{event, style::ContentStyle};
use labcore::dims::Dims;

use super::{box_center_screen, key_press, text_width};
use crate::{
    error::GameError,
    renderer::{Frame, Renderer},
};

pub fn popup_size(title: &str, texts: &[&str]) -> Dims {
    match texts.iter().map(|text| text_width(text)).max() {
        Some(l) => Dims(2 + 2 + l.max(text_width(title)), 2 + 2 + texts.len() as i32),
        None => Dims(4 + text_width(title), 3),
    }
}

pub fn render_popup(frame: &mut Frame, style: ContentStyle, title: &str, texts: &[&str]) {
    let box_size = popup_size(title, texts);
    let pos = box_center_screen(frame.size(), box_size);

    frame.fill_rect(pos, box_size);
    frame.draw_box(pos, box_size, style);
    frame.draw_str(pos + Dims(2, 1), title, style);

    if !texts.is_empty() {
        frame.draw_str(
            pos + Dims(1, 2),
            &"─".repeat(box_size.0 as usize - 2),
            style,
        );
        for (i, text) in texts.iter().enumerate() {
            frame.draw_str(pos + Dims(2, 3 + i as i32), text, style);
        }
    }
}

/// Shows a popup over whatever `background` draws until a key is pressed, returning that key.
pub fn popup(
    renderer: &mut Renderer,
    style: ContentStyle,
    title: &str,
    texts: &[&str],
    mut background: impl FnMut(&mut Frame),
) -> Result<event::KeyCode, GameError> {
    loop {
        let frame = renderer.frame();
        background(frame);
        render_popup(frame, style, title, texts);
        renderer.show()?;

        let event = event::read()?;
        if let Some(code) = key_press(&event) {
            return Ok(code);
        }
        renderer.on_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_fits_longest_line() {
        assert_eq!(popup_size("Won", &["You reached the goal"]), Dims(24, 5));
        assert_eq!(popup_size("A long title", &["x", "y"]), Dims(16, 6));
        assert_eq!(popup_size("Paused", &[]), Dims(10, 3));
    }

    #[test]
    fn draws_centered() {
        let mut frame = Frame::new(Dims(12, 7));
        render_popup(&mut frame, ContentStyle::default(), "Hi", &["abc"]);

        // 7x5 box centered in 12x7
        let mut other = Frame::new(Dims(12, 7));
        other.draw_box(Dims(2, 1), Dims(7, 5), ContentStyle::default());
        other.draw_str(Dims(4, 2), "Hi", ContentStyle::default());
        other.draw_str(Dims(3, 3), "─────", ContentStyle::default());
        other.draw_str(Dims(4, 4), "abc", ContentStyle::default());
        assert_eq!(frame, other);
    }
}
