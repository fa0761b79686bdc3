#![deny(warnings)]

// Newline-delimited STDIN/STDOUT transport

use crate::error::{Result, TransportError};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

fn trim_crlf(s: &str) -> &str {
    s.trim_end_matches(&['\r', '\n'][..])
}

/// STDIN/STDOUT transport carrying one JSON object per line each way
pub struct StdioTransport {
    stdin: BufReader<Stdin>,
    stdout: Stdout,
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl StdioTransport {
    /// Create a new STDIN/STDOUT transport
    pub fn new() -> Self {
        Self {
            stdin: BufReader::new(io::stdin()),
            stdout: io::stdout(),
        }
    }

    /// Read one line from stdin, without its trailing newline.
    ///
    /// Returns `TransportError::ConnectionClosed` at end of input.
    pub async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self
            .stdin
            .read_line(&mut line)
            .await
            .map_err(TransportError::Io)?;
        if n == 0 {
            return Err(TransportError::ConnectionClosed.into());
        }
        Ok(trim_crlf(&line).to_string())
    }

    /// Write one line to stdout and flush it, so the caller observes the
    /// response immediately.
    pub async fn write_line(&mut self, message: &str) -> Result<()> {
        self.stdout
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Io)?;
        self.stdout
            .write_all(b"\n")
            .await
            .map_err(TransportError::Io)?;
        self.stdout.flush().await.map_err(TransportError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_crlf() {
        assert_eq!(trim_crlf("hello\r\n"), "hello");
        assert_eq!(trim_crlf("hello\n"), "hello");
        assert_eq!(trim_crlf("hello\r"), "hello");
        assert_eq!(trim_crlf("hello"), "hello");
    }

    #[test]
    fn test_stdio_transport_creation() {
        let transport = StdioTransport::new();
        let _ = transport;
    }
}
