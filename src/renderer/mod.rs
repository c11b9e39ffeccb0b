use std::{
    io::{self, stdout, Write},
    panic, thread,
};

use crossterm::{
    cursor, event::Event, execute, style, style::ContentStyle, terminal, QueueableCommand,
    SynchronizedUpdate,
};
use labcore::{array::Array2D, dims::Dims};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub character: char,
    pub style: ContentStyle,
}

impl CellContent {
    pub fn empty() -> Self {
        CellContent {
            character: ' ',
            style: ContentStyle::default(),
        }
    }
}

/// Character grid the size of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(Array2D<CellContent>);

impl Frame {
    pub fn new(size: Dims) -> Self {
        Frame(Array2D::new(
            CellContent::empty(),
            size.0.max(0) as usize,
            size.1.max(0) as usize,
        ))
    }

    pub fn size(&self) -> Dims {
        self.0.size()
    }

    pub fn clear(&mut self) {
        self.0.fill(CellContent::empty());
    }

    fn resize(&mut self, size: Dims) {
        if self.size() != size {
            *self = Frame::new(size);
        }
    }

    fn row(&self, y: i32) -> Option<&[CellContent]> {
        usize::try_from(y).ok().and_then(|y| self.0.row(y))
    }

    /// Anything outside of the frame is clipped.
    pub fn draw_char(&mut self, pos: Dims, character: char, style: ContentStyle) {
        if let Some(cell) = self.0.get_mut(pos) {
            *cell = CellContent { character, style };
        }
    }

    pub fn draw_str(&mut self, pos: Dims, text: &str, style: ContentStyle) {
        for (i, character) in text.chars().enumerate() {
            self.draw_char(pos + Dims(i as i32, 0), character, style);
        }
    }

    pub fn draw_box(&mut self, pos: Dims, size: Dims, style: ContentStyle) {
        if size.0 < 2 || size.1 < 2 {
            return;
        }

        let inner = size.0 as usize - 2;
        self.draw_str(pos, &format!("╭{}╮", "─".repeat(inner)), style);
        for y in pos.1 + 1..pos.1 + size.1 - 1 {
            self.draw_char(Dims(pos.0, y), '│', style);
            self.draw_char(Dims(pos.0 + size.0 - 1, y), '│', style);
        }
        self.draw_str(
            Dims(pos.0, pos.1 + size.1 - 1),
            &format!("╰{}╯", "─".repeat(inner)),
            style,
        );
    }

    /// Fills the area with blanks, so whatever was drawn under it disappears.
    pub fn fill_rect(&mut self, pos: Dims, size: Dims) {
        for offset in Dims::iter_fill(Dims::ZERO, size) {
            self.draw_char(pos + offset, ' ', ContentStyle::default());
        }
    }
}

/// Double buffered terminal output.
///
/// Turns on raw mode and the alternate screen when created and restores the terminal when
/// dropped or when the program panics.
pub struct Renderer {
    size: Dims,
    shown: Frame,
    hidden: Frame,
    full_redraw: bool,
}

impl Renderer {
    pub fn new() -> io::Result<Self> {
        let size = term_size()?;
        let mut ren = Renderer {
            size,
            shown: Frame::new(size),
            hidden: Frame::new(size),
            full_redraw: true,
        };

        ren.turn_on()?;

        Ok(ren)
    }

    fn turn_on(&mut self) -> io::Result<()> {
        self.register_panic_hook();

        terminal::enable_raw_mode()?;
        execute!(stdout(), cursor::Hide, terminal::EnterAlternateScreen)?;

        Ok(())
    }

    fn turn_off(&mut self) -> io::Result<()> {
        self.unregister_panic_hook();

        execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn register_panic_hook(&self) {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
            let _ = terminal::disable_raw_mode();

            prev(info)
        }));
    }

    fn unregister_panic_hook(&self) {
        if !thread::panicking() {
            let _ = panic::take_hook();
        }
    }

    fn on_resize(&mut self, size: Dims) {
        self.size = size;
        self.shown.resize(size);
        self.hidden.resize(size);
        self.full_redraw = true;
    }

    pub fn on_event(&mut self, event: &Event) {
        if let Event::Resize(x, y) = event {
            self.on_resize(Dims(*x as i32, *y as i32));
        }
    }

    pub fn frame(&mut self) -> &mut Frame {
        &mut self.hidden
    }

    /// Writes the lines that changed since the last call and starts a new, empty frame.
    pub fn show(&mut self) -> io::Result<()> {
        let mut tty = stdout();

        tty.sync_update(|tty| {
            let mut current = ContentStyle::default();
            tty.queue(style::ResetColor)?;

            for y in 0..self.size.1 {
                let (Some(line), shown) = (self.hidden.row(y), self.shown.row(y)) else {
                    break;
                };
                if !self.full_redraw && Some(line) == shown {
                    continue;
                }

                tty.queue(cursor::MoveTo(0, y as u16))?;
                for cell in line {
                    if cell.style != current {
                        tty.queue(style::SetAttribute(style::Attribute::Reset))?;
                        tty.queue(style::SetForegroundColor(
                            cell.style.foreground_color.unwrap_or(style::Color::Reset),
                        ))?;
                        tty.queue(style::SetBackgroundColor(
                            cell.style.background_color.unwrap_or(style::Color::Reset),
                        ))?;
                        tty.queue(style::SetAttributes(cell.style.attributes))?;
                        current = cell.style;
                    }
                    tty.queue(style::Print(cell.character))?;
                }
            }

            tty.flush()?;
            self.full_redraw = false;

            io::Result::Ok(())
        })??;

        std::mem::swap(&mut self.shown, &mut self.hidden);
        self.hidden.clear();

        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.turn_off();
    }
}

pub fn term_size() -> io::Result<Dims> {
    let (w, h) = terminal::size()?;
    Ok(Dims(w as i32, h as i32))
}
