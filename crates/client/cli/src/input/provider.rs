use std::io::{self, BufRead, StdinLock, Stdout, Write};

use campaign::{ChoiceError, DestinationPrompt, DestinationProvider};
use console::style;

/// Destination provider that reads answers line by line from a terminal.
///
/// Lines that are not integers are re-asked here; range checks are left to
/// the linker, which reports them back through [`DestinationProvider::rejected`].
pub struct ConsoleProvider<R, W> {
    input: R,
    output: W,
}

impl ConsoleProvider<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_number(&mut self, question: &str) -> Result<i64, ChoiceError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{question} ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ChoiceError::Closed);
            }

            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(
                    self.output,
                    "{}",
                    style(format!("'{}' is not a whole number", line.trim())).red()
                )?,
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> DestinationProvider for ConsoleProvider<R, W> {
    fn choose_destination(&mut self, prompt: &DestinationPrompt) -> Result<i64, ChoiceError> {
        let question = format!(
            "{} door at {}: destination [0-{}, 0 = finish line]?",
            style(prompt.map).cyan(),
            prompt.position,
            prompt.max
        );
        self.read_number(&question)
    }

    fn choose_start(&mut self, max: u32) -> Result<i64, ChoiceError> {
        self.read_number(&format!("Starting map [1-{max}]?"))
    }

    fn rejected(&mut self, value: i64, min: u32, max: u32) {
        let _ = writeln!(
            self.output,
            "{}",
            style(format!("{value} is outside [{min}, {max}], try again")).yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use game_core::{MapId, Position};

    fn provider(input: &str) -> ConsoleProvider<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleProvider::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reasks_non_integer_lines() {
        let mut provider = provider("two\n\n 2 \n");
        let prompt = DestinationPrompt {
            map: MapId(1),
            position: Position::new(2, 3),
            max: 4,
        };

        assert_eq!(provider.choose_destination(&prompt).unwrap(), 2);

        let output = String::from_utf8(provider.into_output()).unwrap();
        assert_eq!(output.matches("destination [0-4").count(), 3);
        assert!(output.contains("not a whole number"));
    }

    #[test]
    fn test_eof_closes() {
        let mut provider = provider("");
        let err = provider.choose_start(3).unwrap_err();
        assert!(matches!(err, ChoiceError::Closed));
    }

    #[test]
    fn test_negative_numbers_pass_through() {
        let mut provider = provider("-4\n");
        assert_eq!(provider.choose_start(3).unwrap(), -4);

        provider.rejected(-4, 1, 3);
        let output = String::from_utf8(provider.into_output()).unwrap();
        assert!(output.contains("outside [1, 3]"));
    }
}
