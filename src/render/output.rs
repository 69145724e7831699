use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Blank,
    Row(String),
}

/// Text collected for the console, flushed by the binary.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Title(s.into()));
    }

    pub fn blank(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }

    pub fn row(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Row(s.into()));
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| match b {
            OutputBlock::Title(s) | OutputBlock::Row(s) => s.as_str(),
            OutputBlock::Blank => "",
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            OutputBlock::Row(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl Output {
    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        for line in self.lines() {
            writeln!(w, "{line}")?;
        }
        w.flush()
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_to_matches_display() {
        let mut out = Output::new();
        out.title("Header");
        out.blank();
        out.row("a | b");

        let mut buf = Vec::new();
        out.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), out.to_string());
        assert_eq!(out.to_string(), "Header\n\na | b\n");
    }

    #[test]
    fn write_to_reports_broken_pipe() {
        let mut out = Output::new();
        out.title("Header");

        let err = out.write_to(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
