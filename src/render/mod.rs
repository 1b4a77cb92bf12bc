/// Text output: the console sink, message catalog, styling and help
/// assembly.
pub mod help;
pub mod messages;
pub mod style;

/// Where resolution writes its text.
///
/// The engine never touches stdout directly; everything goes through a
/// `Console`, so resolution is observable in tests without capturing
/// process output.
pub trait Console {
    /// Write one block of text followed by a newline.
    fn line(&mut self, text: &str);
}

/// The production sink: writes to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// An in-memory sink that records every line.
///
/// Useful for testing applications built on this crate (and used by
/// the crate's own tests).
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    /// A fresh, empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Console for BufferConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_owned());
    }
}
