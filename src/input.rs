use raylib::consts::KeyboardKey;
use crate::error::{Result, SlideError};

/// Keys that move the carousel, also honoured on auto-repeat.
pub const NAVIGATION_KEYS: [KeyboardKey; 2] = [KeyboardKey::KEY_LEFT, KeyboardKey::KEY_RIGHT];

/// Clickable controls laid out by the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Indicator(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click(Control),
    KeyPressed(KeyboardKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Canonical commands understood by the slide controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance(Direction),
    JumpTo(usize),
}

impl InputEvent {
    /// Translates a raw input event. Keys other than the two arrows are ignored.
    pub fn command(&self) -> Option<Command> {
        match self {
            InputEvent::Click(Control::Next) => Some(Command::Advance(Direction::Forward)),
            InputEvent::Click(Control::Previous) => Some(Command::Advance(Direction::Backward)),
            InputEvent::Click(Control::Indicator(tag)) => Some(Command::JumpTo(*tag)),
            InputEvent::KeyPressed(KeyboardKey::KEY_RIGHT) => Some(Command::Advance(Direction::Forward)),
            InputEvent::KeyPressed(KeyboardKey::KEY_LEFT) => Some(Command::Advance(Direction::Backward)),
            InputEvent::KeyPressed(_) => None,
        }
    }
}

/// A slide index that has been checked against the slide count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex(usize);

impl SlideIndex {
    pub fn new(index: usize, len: usize) -> Result<Self> {
        if index < len {
            Ok(Self(index))
        } else {
            Err(SlideError::InvalidIndex { index, len })
        }
    }

    /// Parses an index coming from string-typed data (command line, tags).
    pub fn parse(raw: &str, len: usize) -> Result<Self> {
        let index = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| SlideError::MalformedIndex(raw.to_string()))?;
        Self::new(index, len)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<SlideIndex> for Command {
    fn from(index: SlideIndex) -> Self {
        Command::JumpTo(index.get())
    }
}
