use crossterm::{
    event::{self, KeyCode},
    style::{Color, ContentStyle},
};
use labcore::dims::Dims;

use super::{box_center_screen, key_press, text_width};
use crate::{
    error::GameError,
    renderer::{Frame, Renderer},
};

pub fn menu_size(title: &str, options: &[String]) -> Dims {
    let count_width = options.len().to_string().len() as i32 + 2;
    let widest = options
        .iter()
        .map(|opt| text_width(opt) + count_width + 2)
        .max()
        .unwrap_or(0);

    Dims(widest.max(text_width(title) + 2) + 2, options.len() as i32 + 4)
}

pub fn render_menu(
    frame: &mut Frame,
    style: ContentStyle,
    title: &str,
    options: &[String],
    selected: usize,
) {
    let menu_size = menu_size(title, options);
    let pos = box_center_screen(frame.size(), menu_size);
    let max_count = options.len().to_string().len();

    frame.draw_box(pos, menu_size, style);
    frame.draw_str(pos + Dims(2, 1), title, style);
    frame.draw_str(pos + Dims(1, 2), &"─".repeat(menu_size.0 as usize - 2), style);

    for (i, option) in options.iter().enumerate() {
        let style = if i == selected {
            ContentStyle {
                background_color: Some(Color::White),
                foreground_color: Some(Color::Black),
                ..Default::default()
            }
        } else {
            style
        };

        let number = (i + 1).to_string();
        frame.draw_str(
            pos + Dims(1, 3 + i as i32),
            &format!(
                "{} {}. {}{}",
                if i == selected { ">" } else { " " },
                number,
                " ".repeat(max_count - number.len()),
                option
            ),
            style,
        );
    }
}

/// Lets the user pick one of `options`, returning its index.
pub fn run_menu(
    renderer: &mut Renderer,
    style: ContentStyle,
    title: &str,
    options: &[String],
    default: usize,
) -> Result<usize, GameError> {
    let opt_count = options.len();
    if opt_count == 0 {
        return Err(GameError::Quit);
    }
    let mut selected = default.min(opt_count - 1);

    loop {
        render_menu(renderer.frame(), style, title, options, selected);
        renderer.show()?;

        let event = event::read()?;
        renderer.on_event(&event);

        match key_press(&event) {
            Some(KeyCode::Up | KeyCode::Char('w' | 'W')) => {
                selected = if selected == 0 {
                    opt_count - 1
                } else {
                    selected - 1
                }
            }
            Some(KeyCode::Down | KeyCode::Char('s' | 'S')) => selected = (selected + 1) % opt_count,
            Some(KeyCode::Enter | KeyCode::Char(' ')) => return Ok(selected),
            Some(KeyCode::Esc | KeyCode::Char('q' | 'Q')) => return Err(GameError::Quit),
            Some(KeyCode::Char(ch)) => {
                if let Some(n) = ch.to_digit(10) {
                    if (1..=opt_count).contains(&(n as usize)) {
                        selected = n as usize - 1;
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size() {
        let options = vec!["5x5".to_string(), "10x10".to_string()];
        // "> 1. 10x10" plus borders
        assert_eq!(menu_size("Size", &options), Dims(12, 6));
        assert_eq!(menu_size("Pick a maze size", &options), Dims(20, 6));
    }
}
