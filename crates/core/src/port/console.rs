// Console Port (line-oriented terminal I/O)

use std::io::{self, BufRead, Write};

/// Console interface (allows canned input and captured output in tests)
pub trait Console {
    /// Show `prompt` (without newline) and read one line
    ///
    /// # Returns
    /// - `Ok(Some(line))` without the trailing line terminator
    /// - `Ok(None)` once the input stream is exhausted
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over any buffered reader / writer pair (production: stdin + stdout)
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and hand back the writer (e.g. captured output)
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // raw bytes: undecodable input is handed on (lossily) for validation
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}
