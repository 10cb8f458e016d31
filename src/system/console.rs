use std::fmt::Display;
use std::io::{IsTerminal, Write};

use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Failure,
    Warning,
    Info,
    Emphasis,
    Banner,
}

/// User-facing output. Colors are dropped when disabled or when stdout is
/// not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    use_color: bool,
}

impl Console {
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        Self {
            use_color: !no_color && std::io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self { use_color: false }
    }

    #[must_use]
    pub fn paint<T>(&self, tone: Tone, text: T) -> String
    where
        T: Display,
    {
        let text = text.to_string();
        if !self.use_color {
            return text;
        }
        match tone {
            Tone::Plain => text,
            Tone::Success => text.green().to_string(),
            Tone::Failure => text.red().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Info => text.blue().to_string(),
            Tone::Emphasis => text.green().bold().to_string(),
            Tone::Banner => text.black().on_yellow().bold().to_string(),
        }
    }

    pub fn out<T>(&self, tone: Tone, text: T)
    where
        T: Display,
    {
        println!("{}", self.paint(tone, text));
    }

    /// Writes `text` to stdout exactly as given: no color, no added newline.
    pub fn relay(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = relay_to(&mut stdout, text) {
            tracing::debug!("Failed to relay output: {}", err);
        }
    }

    pub fn err<T>(&self, tone: Tone, text: T)
    where
        T: Display,
    {
        eprintln!("{}", self.paint(tone, text));
    }
}

fn relay_to<W>(writer: &mut W, text: &str) -> std::io::Result<()>
where
    W: Write,
{
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
