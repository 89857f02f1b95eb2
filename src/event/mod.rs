//! Input events and crossterm conversion.
//!
//! The layout engine is single-threaded and synchronous: the caller owns
//! the event-read loop and feeds converted events to its view tree. Only
//! the conversion from crossterm's event types lives here.

use crossterm::event::{self, Event, KeyEventKind};

/// Key codes for keyboard input.
///
/// A simplified subset of crossterm's `KeyCode`, covering what terminal
/// view trees typically route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character key.
    Char(char),
    /// One of the function keys, F1 through F12.
    F(u8),
    /// Backspace.
    Backspace,
    /// Enter (Return).
    Enter,
    /// The left arrow key.
    Left,
    /// The right arrow key.
    Right,
    /// The up arrow key.
    Up,
    /// The down arrow key.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Forward delete.
    Delete,
    /// Escape.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift was held.
    pub shift: bool,
    /// Control was held.
    pub control: bool,
    /// Alt (Option) was held.
    pub alt: bool,
}

impl KeyModifiers {
    /// The empty modifier set.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Whether at least one modifier was held.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left button.
    Left,
    /// The right button.
    Right,
    /// The middle button.
    Middle,
}

/// Mouse event details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Column the event happened in.
    pub x: i32,
    /// Row the event happened in.
    pub y: i32,
    /// Button involved, when one was.
    pub button: Option<MouseButton>,
    /// Modifiers held at event time.
    pub modifiers: KeyModifiers,
}

/// A terminal input event, routed through the view tree.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A key press.
    Key {
        /// Which key.
        code: KeyCode,
        /// Modifiers held at press time.
        modifiers: KeyModifiers,
    },

    /// A mouse button went down.
    MouseDown(MouseEvent),

    /// A mouse button came up.
    MouseUp(MouseEvent),

    /// The pointer moved, possibly while dragging.
    MouseMove(MouseEvent),

    /// The scroll wheel turned.
    MouseScroll {
        /// Column under the pointer.
        x: i32,
        /// Row under the pointer.
        y: i32,
        /// Wheel delta; positive scrolls up.
        delta: i16,
    },

    /// The terminal changed size.
    Resize {
        /// Width after the resize.
        width: u16,
        /// Height after the resize.
        height: u16,
    },

    /// Bracketed paste content.
    Paste(String),
}

impl InputEvent {
    /// The mouse event carried by this input event, if any.
    pub const fn mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::MouseDown(m) | Self::MouseUp(m) | Self::MouseMove(m) => Some(m),
            _ => None,
        }
    }
}

/// Convert a crossterm event to an [`InputEvent`].
///
/// Key release/repeat events, focus changes, and unknown keys map to `None`.
pub fn from_crossterm(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            let code = convert_key_code(key_event.code)?;
            let modifiers = convert_modifiers(key_event.modifiers);
            Some(InputEvent::Key { code, modifiers })
        }

        Event::Mouse(mouse_event) => convert_mouse_event(&mouse_event),

        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),

        Event::Paste(text) => Some(InputEvent::Paste(text)),

        Event::FocusGained | Event::FocusLost => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

fn convert_mouse_event(mouse: &event::MouseEvent) -> Option<InputEvent> {
    let modifiers = convert_modifiers(mouse.modifiers);
    let x = i32::from(mouse.column);
    let y = i32::from(mouse.row);

    match mouse.kind {
        event::MouseEventKind::Down(button) => Some(InputEvent::MouseDown(MouseEvent {
            x,
            y,
            button: convert_mouse_button(button),
            modifiers,
        })),
        event::MouseEventKind::Up(button) => Some(InputEvent::MouseUp(MouseEvent {
            x,
            y,
            button: convert_mouse_button(button),
            modifiers,
        })),
        event::MouseEventKind::Moved => Some(InputEvent::MouseMove(MouseEvent {
            x,
            y,
            button: None,
            modifiers,
        })),
        event::MouseEventKind::Drag(button) => Some(InputEvent::MouseMove(MouseEvent {
            x,
            y,
            button: convert_mouse_button(button),
            modifiers,
        })),
        event::MouseEventKind::ScrollUp => Some(InputEvent::MouseScroll { x, y, delta: 1 }),
        event::MouseEventKind::ScrollDown => Some(InputEvent::MouseScroll { x, y, delta: -1 }),
        _ => None,
    }
}

const fn convert_mouse_button(button: event::MouseButton) -> Option<MouseButton> {
    Some(match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    })
}
