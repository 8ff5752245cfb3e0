//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Speed-read a text one word at a time.
#[derive(Parser, Debug)]
#[command(name = "glimpse", version, about = "RSVP speed reader for the terminal")]
pub struct Cli {
    /// Plain-text file to read. Reads stdin when neither FILE nor --text is given.
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Read this text instead of a file
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Words per minute
    #[arg(short, long, value_name = "WPM")]
    pub wpm: Option<u32>,

    /// Focal letter mode: auto, middle, or a letter offset
    #[arg(long, value_name = "MODE", allow_negative_numbers = true)]
    pub focus: Option<String>,

    /// Focal letter colour as #rrggbb
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Word size in pixels for graphical front ends
    #[arg(long, value_name = "PX")]
    pub font_size: Option<u16>,

    /// Words skipped by the seek keys
    #[arg(long, value_name = "WORDS")]
    pub seek_step: Option<usize>,

    /// Checkpoint key; defaults to the file path
    #[arg(long, value_name = "KEY")]
    pub session: Option<String>,

    /// Where reading positions are stored
    #[arg(long, value_name = "PATH")]
    pub progress_file: Option<PathBuf>,

    /// List saved reading positions and exit
    #[arg(long, conflicts_with_all = ["file", "text", "forget"])]
    pub list: bool,

    /// Delete the saved reading position for KEY and exit
    #[arg(long, value_name = "KEY", conflicts_with_all = ["file", "text"])]
    pub forget: Option<String>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Mark the focal letter with brackets instead of colour
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_and_overrides() {
        let cli = Cli::try_parse_from([
            "glimpse", "book.txt", "--wpm", "320", "--focus", "middle", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("book.txt")));
        assert_eq!(cli.wpm, Some(320));
        assert_eq!(cli.focus.as_deref(), Some("middle"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.autoplay);
    }

    #[test]
    fn file_and_text_conflict() {
        assert!(Cli::try_parse_from(["glimpse", "book.txt", "--text", "hi"]).is_err());
    }

    #[test]
    fn focus_takes_negative_offset() {
        let cli = Cli::try_parse_from(["glimpse", "--text", "hi", "--focus", "-2"]).unwrap();
        assert_eq!(cli.focus.as_deref(), Some("-2"));
    }

    #[test]
    fn library_commands_stand_alone() {
        let cli = Cli::try_parse_from(["glimpse", "--list"]).unwrap();
        assert!(cli.list);

        let cli = Cli::try_parse_from(["glimpse", "--forget", "paste-00ff"]).unwrap();
        assert_eq!(cli.forget.as_deref(), Some("paste-00ff"));

        assert!(Cli::try_parse_from(["glimpse", "book.txt", "--list"]).is_err());
        assert!(Cli::try_parse_from(["glimpse", "--text", "hi", "--forget", "k"]).is_err());
    }
}
