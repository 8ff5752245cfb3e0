//! Input abstraction layer: abstract keys, transport commands and polled providers.

mod mock;

pub use mock::ScriptedInput;

pub const DEFAULT_SEEK_STEP: usize = 10;

/// Toolkit-independent keys the reader responds to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Space,
    Left,
    Right,
    Up,
    Down,
    Restart,
    Escape,
}

/// Logical transport actions consumed by the playback controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    TogglePlay,
    Pause,
    SeekBackward(usize),
    SeekForward(usize),
    Restart,
    Faster,
    Slower,
}

/// Key to command binding with a configurable seek distance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyMap {
    pub seek_step: usize,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            seek_step: DEFAULT_SEEK_STEP,
        }
    }
}

impl KeyMap {
    pub const fn new(seek_step: usize) -> Self {
        Self { seek_step }
    }

    pub fn command_for(&self, key: Key) -> Command {
        match key {
            Key::Space => Command::TogglePlay,
            Key::Left => Command::SeekBackward(self.seek_step),
            Key::Right => Command::SeekForward(self.seek_step),
            Key::Up => Command::Faster,
            Key::Down => Command::Slower,
            Key::Restart => Command::Restart,
            Key::Escape => Command::Pause,
        }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<Command>, Self::Error>;
}
