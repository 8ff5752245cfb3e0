//! Line-based keyboard commands read from stdin on a helper thread.

use std::{
    io::{self, BufRead},
    thread,
    time::Duration,
};

use crossbeam_channel::{Receiver, TryRecvError, bounded, never, select, unbounded};
use glimpse_core::input::{Command, InputProvider, Key, KeyMap};
use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserInput {
    Key(Key),
    Quit,
}

pub const HELP: &str = "keys: <enter>/p play-pause  h/l seek  k/j faster-slower  r restart  s stop  q quit";

pub fn parse_line(line: &str) -> Option<UserInput> {
    let key = match line.trim().to_ascii_lowercase().as_str() {
        "" | "p" | "space" => Key::Space,
        "h" | "<" | "left" => Key::Left,
        "l" | ">" | "right" => Key::Right,
        "k" | "+" | "up" => Key::Up,
        "j" | "-" | "down" => Key::Down,
        "r" | "restart" => Key::Restart,
        "s" | "esc" | "stop" => Key::Escape,
        "q" | "quit" => return Some(UserInput::Quit),
        _ => return None,
    };
    Some(UserInput::Key(key))
}

/// Spawn the reader thread. The channel disconnects when stdin reaches EOF.
pub fn spawn_stdin_reader() -> Receiver<UserInput> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_line(&line) {
                Some(input) => {
                    if tx.send(input).is_err() {
                        break;
                    }
                }
                None => debug!("unknown command `{}`", line.trim()),
            }
        }
    });
    rx
}

/// Route SIGINT into a channel so Ctrl-C ends the session like `q` does.
pub fn install_interrupt_handler() -> Result<Receiver<()>, ctrlc::Error> {
    let (tx, rx) = bounded(1);
    ctrlc::set_handler(move || {
        let _ = tx.try_send(());
    })?;
    Ok(rx)
}

enum Wake {
    Input(UserInput),
    Closed,
    Interrupted,
    HandlerGone,
    Idle,
}

/// Channel-backed [`InputProvider`] that also lets the main loop sleep until
/// either input arrives or the next word is due.
pub struct ChannelInput {
    rx: Option<Receiver<UserInput>>,
    interrupt: Option<Receiver<()>>,
    key_map: KeyMap,
    pending: Option<UserInput>,
    quit: bool,
}

impl ChannelInput {
    pub fn new(rx: Option<Receiver<UserInput>>, key_map: KeyMap) -> Self {
        Self {
            rx,
            interrupt: None,
            key_map,
            pending: None,
            quit: false,
        }
    }

    pub fn with_interrupt(mut self, interrupt: Receiver<()>) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// No further input can arrive.
    pub fn is_closed(&self) -> bool {
        self.rx.is_none() && self.pending.is_none()
    }

    /// Block for up to `timeout` waiting for input or an interrupt.
    pub fn wait(&mut self, timeout: Duration) {
        if self.pending.is_some() || self.quit {
            return;
        }

        let wake = {
            let no_keys = never();
            let no_interrupt = never();
            let keys = self.rx.as_ref().unwrap_or(&no_keys);
            let interrupt = self.interrupt.as_ref().unwrap_or(&no_interrupt);
            select! {
                recv(keys) -> msg => msg.map_or(Wake::Closed, Wake::Input),
                recv(interrupt) -> msg => msg.map_or(Wake::HandlerGone, |()| Wake::Interrupted),
                default(timeout) => Wake::Idle,
            }
        };

        match wake {
            Wake::Input(input) => self.pending = Some(input),
            Wake::Closed => self.rx = None,
            Wake::Interrupted => self.quit = true,
            Wake::HandlerGone => self.interrupt = None,
            Wake::Idle => {}
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|interrupt| interrupt.try_recv().is_ok())
    }

    fn next_input(&mut self) -> Option<UserInput> {
        if let Some(input) = self.pending.take() {
            return Some(input);
        }
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(input) => Some(input),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                None
            }
        }
    }
}

impl InputProvider for ChannelInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<Command>, Self::Error> {
        if self.interrupted() {
            self.quit = true;
        }
        while let Some(input) = self.next_input() {
            match input {
                UserInput::Key(key) => return Ok(Some(self.key_map.command_for(key))),
                UserInput::Quit => self.quit = true,
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_lines() {
        assert_eq!(parse_line(""), Some(UserInput::Key(Key::Space)));
        assert_eq!(parse_line(" L "), Some(UserInput::Key(Key::Right)));
        assert_eq!(parse_line("h"), Some(UserInput::Key(Key::Left)));
        assert_eq!(parse_line("r"), Some(UserInput::Key(Key::Restart)));
        assert_eq!(parse_line("q"), Some(UserInput::Quit));
        assert_eq!(parse_line("xyzzy"), None);
    }

    #[test]
    fn channel_input_maps_keys_and_quit() {
        let (tx, rx) = unbounded();
        let mut input = ChannelInput::new(Some(rx), KeyMap::new(1));

        tx.send(UserInput::Key(Key::Right)).unwrap();
        tx.send(UserInput::Quit).unwrap();
        drop(tx);

        assert_eq!(input.poll_event().unwrap(), Some(Command::SeekForward(1)));
        assert_eq!(input.poll_event().unwrap(), None);
        assert!(input.quit_requested());
        assert!(input.is_closed());
    }

    #[test]
    fn wait_keeps_received_input() {
        let (tx, rx) = unbounded();
        let mut input = ChannelInput::new(Some(rx), KeyMap::default());
        tx.send(UserInput::Key(Key::Space)).unwrap();

        input.wait(Duration::from_millis(50));
        assert!(!input.is_closed());
        assert_eq!(input.poll_event().unwrap(), Some(Command::TogglePlay));
    }

    #[test]
    fn interrupt_requests_quit() {
        let (tx, interrupt) = bounded(1);
        let mut input = ChannelInput::new(None, KeyMap::default()).with_interrupt(interrupt);
        assert!(!input.quit_requested());

        tx.send(()).unwrap();
        assert_eq!(input.poll_event().unwrap(), None);
        assert!(input.quit_requested());
    }

    #[test]
    fn interrupt_wakes_a_waiting_loop() {
        let (keys_tx, keys) = unbounded::<UserInput>();
        let (tx, interrupt) = bounded(1);
        let mut input = ChannelInput::new(Some(keys), KeyMap::default()).with_interrupt(interrupt);

        tx.send(()).unwrap();
        input.wait(Duration::from_secs(5));
        assert!(input.quit_requested());
        drop(keys_tx);
    }
}
