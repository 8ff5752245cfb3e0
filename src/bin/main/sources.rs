//! Text sources available from the command line.

use std::{
    collections::hash_map::DefaultHasher,
    fs,
    hash::{Hash, Hasher},
    io::{self, Read},
    path::PathBuf,
};

use glimpse_core::{TextSource, content::StaticTextSource};

#[derive(Debug, Clone)]
pub enum CliSource {
    File(PathBuf),
    Paste(String),
    Stdin,
}

impl CliSource {
    /// Key under which this text's reading position is stored.
    pub fn session_key(&self) -> String {
        match self {
            Self::File(path) => fs::canonicalize(path)
                .unwrap_or_else(|_| path.clone())
                .display()
                .to_string(),
            Self::Paste(text) => format!("paste-{:016x}", content_hash(text)),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Whether stdin stays free for keyboard commands.
    pub fn leaves_stdin_free(&self) -> bool {
        !matches!(self, Self::Stdin)
    }
}

impl TextSource for CliSource {
    type Error = io::Error;

    fn load(&mut self) -> Result<String, Self::Error> {
        match self {
            Self::File(path) => fs::read_to_string(path),
            Self::Paste(text) => StaticTextSource::new(text)
                .load()
                .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg)),
            Self::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

fn content_hash(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "uno dos\ntres").unwrap();

        let mut source = CliSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), "uno dos\ntres");
    }

    #[test]
    fn missing_file_fails() {
        let mut source = CliSource::File(PathBuf::from("/definitely/not/here.txt"));
        assert_eq!(source.load().unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn binary_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let mut source = CliSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn paste_keys_are_stable_per_text() {
        let a = CliSource::Paste("same text".into());
        let b = CliSource::Paste("same text".into());
        let c = CliSource::Paste("other text".into());
        assert_eq!(a.session_key(), b.session_key());
        assert_ne!(a.session_key(), c.session_key());
        assert!(a.session_key().starts_with("paste-"));
    }

    #[test]
    fn blank_paste_fails() {
        let mut source = CliSource::Paste("   ".into());
        assert_eq!(source.load().unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }
}
