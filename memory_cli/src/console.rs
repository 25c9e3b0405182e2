use std::io::{BufRead, ErrorKind, Write};

use memory::PlayerInput;
use tracing::trace;

/// The player's side of the game: lines in, text out.
pub struct Console<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for input.
    // Should always be empty before and after read_input().
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Where the game's text goes, for use with `write!`.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `prompt` and waits for one line.
    ///
    /// The end of input counts as a request to quit, and a line that is not
    /// UTF-8 as malformed input.
    pub fn read_input(&mut self, prompt: &str) -> anyhow::Result<PlayerInput> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.buf.clear();
        let num_bytes_read = match self.input.read_line(&mut self.buf) {
            Ok(num_bytes_read) => num_bytes_read,
            // The offending line has been consumed, so the next read starts fresh
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                trace!("Read input that is not UTF-8");
                self.buf.clear();
                return Ok(PlayerInput::Malformed);
            }
            Err(err) => return Err(err.into()),
        };
        let line = self.buf.trim_end();
        trace!(input = %line, "Read input");
        let input = if num_bytes_read == 0 {
            writeln!(self.output)?;
            PlayerInput::Quit
        } else {
            // Parsing a PlayerInput cannot fail
            line.parse().unwrap_or(PlayerInput::Malformed)
        };
        self.buf.clear();
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_one_line_per_prompt() {
        let mut console = Console::new(Cursor::new("7\nsave\nbanana\n"), Vec::new());
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Coordinate(7));
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Save);
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Malformed);
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Quit);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > > \n");
    }

    #[test]
    fn non_utf8_line_is_malformed() {
        let mut console = Console::new(Cursor::new(&b"\xff\xfe\n1\n"[..]), Vec::new());
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Malformed);
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Coordinate(1));
        assert_eq!(console.read_input("> ").unwrap(), PlayerInput::Quit);
    }
}
