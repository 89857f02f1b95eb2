//! Split demo: three panes whose space redistributes as they hide.
//!
//! Keys 1-3 toggle each pane; the hidden pane's share flows to its
//! configured consumers. Press `q` or Esc to quit.

use slat::event::{from_crossterm, InputEvent, KeyCode};
use slat::terminal::Terminal;
use slat::{Buffer, Cell, Flex, Rect, Rgb, View};
use std::cell::Cell as Flag;
use std::io;
use std::rc::Rc;

/// A colored pane with an externally toggleable visibility flag.
struct Pane {
    title: &'static str,
    color: Rgb,
    visible: Rc<Flag<bool>>,
    bounds: Rect,
}

impl Pane {
    fn new(title: &'static str, color: Rgb, visible: &Rc<Flag<bool>>) -> Self {
        Self {
            title,
            color,
            visible: visible.clone(),
            bounds: Rect::ZERO,
        }
    }
}

impl View for Pane {
    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&mut self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.color));
        if !self.bounds.is_empty() {
            let label = format!("{} {}x{}", self.title, self.bounds.width, self.bounds.height);
            buffer.set_str(self.bounds.x + 1, self.bounds.y, &label, Rgb::BLACK, self.color);
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let flags: Vec<Rc<Flag<bool>>> = (0..3).map(|_| Rc::new(Flag::new(true))).collect();

    let mut root = Flex::row();
    let sidebar = root.add_item(
        Pane::new("sidebar", Rgb::new(70, 130, 180), &flags[0]),
        24,
        0,
        false,
    );
    let editor = root.add_item(
        Pane::new("editor", Rgb::new(60, 179, 113), &flags[1]),
        0,
        2,
        true,
    );
    let preview = root.add_item(
        Pane::new("preview", Rgb::new(205, 133, 63), &flags[2]),
        0,
        1,
        false,
    );
    // Sidebar's 24 columns flow to the editor; the editor's weight splits
    // between sidebar and preview; the preview donates to the editor.
    root.set_consumers(sidebar, &[1]);
    root.set_consumers(editor, &[0, 2]);
    root.set_consumers(preview, &[1]);

    let mut terminal = Terminal::new()?;
    let (width, height) = Terminal::size()?;
    let mut buffer = Buffer::new(width, height);

    loop {
        root.set_bounds(buffer.area());
        buffer.clear();
        root.draw(&mut buffer);
        terminal.draw(&buffer)?;

        let Some(event) = from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        match event {
            InputEvent::Key { code: KeyCode::Char(c @ '1'..='3'), .. } => {
                let flag = &flags[(c as usize) - ('1' as usize)];
                flag.set(!flag.get());
            }
            InputEvent::Key { code: KeyCode::Char('q') | KeyCode::Esc, .. } => break,
            InputEvent::Resize { width, height } => buffer.resize(width, height),
            _ => {}
        }
    }

    Ok(())
}
