use super::TextSource;

/// In-memory text, standing in for pasted input.
#[derive(Debug, Clone)]
pub struct StaticTextSource<'a> {
    text: &'a str,
}

impl<'a> StaticTextSource<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl TextSource for StaticTextSource<'_> {
    type Error = &'static str;

    fn load(&mut self) -> Result<String, Self::Error> {
        if self.text.trim().is_empty() {
            return Err("empty paste");
        }

        Ok(self.text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_pasted_text() {
        let mut src = StaticTextSource::new("hola mundo");
        assert_eq!(src.load().unwrap(), "hola mundo");
    }

    #[test]
    fn blank_paste_is_unavailable() {
        let mut src = StaticTextSource::new(" \n ");
        assert_eq!(src.load(), Err("empty paste"));
    }
}
