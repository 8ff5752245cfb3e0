use std::{
    io::IsTerminal,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use glimpse_core::{
    IntervalTicker, PlaybackController, ProgressStore, ReaderError, open_session,
    settings::MemoryProgressStore,
};
use log::{LevelFilter, info, warn};

use cli::Cli;
use config::Config;
use keys::{ChannelInput, install_interrupt_handler, spawn_stdin_reader};
use progress_file::JsonProgressStore;
use sources::CliSource;
use terminal::Terminal;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/config.rs"]
mod config;
#[path = "main/keys.rs"]
mod keys;
#[path = "main/progress_file.rs"]
mod progress_file;
#[path = "main/sources.rs"]
mod sources;
#[path = "main/terminal.rs"]
mod terminal;

const IDLE_POLL_MS: u64 = 250;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::default(),
    }
    .with_cli_overrides(&cli);
    let reader_config = config
        .reader_config()
        .context("invalid reader configuration")?;
    let terminal = Terminal::new(!cli.no_color && std::io::stdout().is_terminal());

    if cli.list || cli.forget.is_some() {
        return manage_library(&cli, &terminal, config.progress_path());
    }

    let mut source = match (&cli.file, &cli.text) {
        (Some(path), _) => CliSource::File(path.clone()),
        (None, Some(text)) => CliSource::Paste(text.clone()),
        (None, None) => CliSource::Stdin,
    };
    let session_key = cli.session.clone().unwrap_or_else(|| source.session_key());

    match config.progress_path() {
        Some(path) => {
            let store = JsonProgressStore::open(path);
            info!("progress file: {}", store.path().display());
            run(&cli, &terminal, &mut source, store, &session_key, reader_config)
        }
        None => {
            warn!("no data directory; reading position will not be kept");
            run(
                &cli,
                &terminal,
                &mut source,
                MemoryProgressStore::new(),
                &session_key,
                reader_config,
            )
        }
    }
}

fn run<P: ProgressStore>(
    cli: &Cli,
    terminal: &Terminal,
    source: &mut CliSource,
    store: P,
    session_key: &str,
    reader_config: glimpse_core::ReaderConfig,
) -> anyhow::Result<()> {
    let mut controller = match open_session(
        source,
        store,
        IntervalTicker::new(),
        session_key,
        reader_config,
    ) {
        Ok(controller) => controller,
        Err(ReaderError::EmptyInput) => {
            terminal.message("No readable words found.")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let keyboard = source.leaves_stdin_free().then(spawn_stdin_reader);
    let mut input = ChannelInput::new(keyboard, controller.key_map());
    match install_interrupt_handler() {
        Ok(interrupt) => input = input.with_interrupt(interrupt),
        Err(err) => warn!("Ctrl-C will not save the reading position: {}", err),
    }

    if controller.current_index() > 0 {
        terminal.message(&format!("Resumed from word {}", controller.current_index() + 1))?;
    }
    if input.is_closed() {
        terminal.message("stdin holds the text; playing without keyboard controls")?;
    } else {
        terminal.message(keys::HELP)?;
    }
    if cli.autoplay || input.is_closed() {
        controller.play()?;
    }

    let started = Instant::now();
    redraw(terminal, &controller)?;

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        let step = pump(&mut controller, &mut input, now_ms);
        if step.redraw {
            redraw(terminal, &controller)?;
        }
        if step.done {
            break;
        }

        let wait_ms = match controller.ticker().next_due_ms() {
            Some(due) => due.saturating_sub(now_ms).min(IDLE_POLL_MS),
            None => IDLE_POLL_MS,
        };
        input.wait(Duration::from_millis(wait_ms));
    }

    controller.teardown();
    terminal.message("")?;
    Ok(())
}

struct Step {
    redraw: bool,
    done: bool,
}

/// One pass of the read loop: apply pending input, then advance if a word is due.
fn pump<P: ProgressStore>(
    controller: &mut PlaybackController<IntervalTicker, P>,
    input: &mut ChannelInput,
    now_ms: u64,
) -> Step {
    let mut redraw = controller.drain_input(input) > 0;
    if input.quit_requested() {
        return Step { redraw, done: true };
    }

    redraw |= controller.poll(now_ms).is_some();
    Step {
        redraw,
        done: !controller.is_playing() && input.is_closed(),
    }
}

fn manage_library(cli: &Cli, terminal: &Terminal, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.context("no data directory; pass --progress-file")?;
    let mut store = JsonProgressStore::open(path);
    let shown = store.path().display().to_string();

    if let Some(key) = &cli.forget {
        let removed = store
            .forget(key)
            .with_context(|| format!("could not update {shown}"))?;
        let note = if removed {
            format!("Forgot `{key}`.")
        } else {
            format!("No saved position for `{key}`.")
        };
        terminal.message(&note)?;
        return Ok(());
    }

    let mut empty = true;
    for session in store.sessions() {
        terminal.message(&session.to_string())?;
        empty = false;
    }
    if empty {
        terminal.message(&format!("No saved reading positions in {shown}."))?;
    }
    Ok(())
}

fn redraw<P: ProgressStore>(
    terminal: &Terminal,
    controller: &PlaybackController<IntervalTicker, P>,
) -> anyhow::Result<()> {
    let state = if controller.is_playing() {
        "▶"
    } else {
        "⏸"
    };
    let status = format!(
        "{state} {}  {}  {} wpm",
        controller.counter_label(),
        controller.time_remaining_label(),
        controller.wpm()
    );
    terminal.draw(controller.frame().as_ref(), &status)?;
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
