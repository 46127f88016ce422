//! Terminal prompting
//!
//! Reads answers from any buffered reader and writes prompts to any writer,
//! so sessions can be driven by stdin/stdout or by in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Interactive prompt over an input and an output stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    pub fn say(&mut self, line: impl fmt::Display) -> TrackerResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prompt for a string input
    ///
    /// Only the line ending is removed from the answer. Returns
    /// [`TrackerError::InputClosed`] when the input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(TrackerError::InputClosed);
        }

        let answer = input.strip_suffix('\n').unwrap_or(&input);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Prompt for a money amount
    pub fn prompt_money(&mut self, prompt: &str) -> TrackerResult<Money> {
        let answer = self.prompt_line(prompt)?;
        Money::parse(&answer).map_err(|e| TrackerError::InvalidNumericInput(e.to_string()))
    }

    /// Prompt for an amount and hand it to `action`, asking again for as long
    /// as parsing or `action` fails with a recoverable error
    pub fn retry_money<T>(
        &mut self,
        prompt: &str,
        mut action: impl FnMut(Money) -> TrackerResult<T>,
    ) -> TrackerResult<T> {
        loop {
            match self.prompt_money(prompt).and_then(&mut action) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, prompt, "rejected input");
                    self.say(format!("Invalid input: {}. Please try again.", e))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_prompt_line_drops_only_line_ending() {
        let mut p = prompter("  groceries \r\nrent\n");
        assert_eq!(p.prompt_line("Description: ").unwrap(), "  groceries ");
        assert_eq!(p.prompt_line("Description: ").unwrap(), "rent");
        assert_eq!(output_of(p), "Description: Description: ");
    }

    #[test]
    fn test_prompt_money_ignores_padding() {
        let mut p = prompter("  12.50 \r\n");
        assert_eq!(p.prompt_money("> ").unwrap(), Money::from_cents(1250));
    }

    #[test]
    fn test_prompt_line_at_eof() {
        let mut p = prompter("");
        assert!(matches!(p.prompt_line("> "), Err(TrackerError::InputClosed)));
    }

    #[test]
    fn test_prompt_line_without_trailing_newline() {
        let mut p = prompter("last");
        assert_eq!(p.prompt_line("> ").unwrap(), "last");
    }

    #[test]
    fn test_prompt_money() {
        let mut p = prompter("12.50\nabc\n");
        assert_eq!(p.prompt_money("> ").unwrap(), Money::from_cents(1250));
        assert!(matches!(
            p.prompt_money("> "),
            Err(TrackerError::InvalidNumericInput(_))
        ));
    }

    #[test]
    fn test_retry_until_valid() {
        let mut p = prompter("abc\n-5\n\n7\n");
        let value = p
            .retry_money("Amount: ", |amount| {
                if amount.is_negative() {
                    Err(TrackerError::negative_amount(amount))
                } else {
                    Ok(amount)
                }
            })
            .unwrap();
        assert_eq!(value, Money::from_cents(700));

        let output = output_of(p);
        assert_eq!(output.matches("Amount: ").count(), 4);
        assert_eq!(output.matches("Please try again.").count(), 3);
        assert!(output.contains("Invalid input: 'abc' is not a number. Please try again."));
        assert!(output.contains("Invalid input: Expense amount cannot be negative: -5.00."));
    }

    #[test]
    fn test_retry_stops_on_unrecoverable_error() {
        let mut p = prompter("1\n2\n");
        let result: TrackerResult<()> = p.retry_money("> ", |_| Err(TrackerError::BudgetNotSet));
        assert!(matches!(result, Err(TrackerError::BudgetNotSet)));
    }

    #[test]
    fn test_retry_stops_when_input_closes() {
        let mut p = prompter("abc\nxyz\n");
        let result = p.retry_money("> ", Ok);
        assert!(matches!(result, Err(TrackerError::InputClosed)));
    }
}
