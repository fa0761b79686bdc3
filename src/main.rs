#![deny(warnings)]

// Binary crate for fileio-bridge - uses library crate

use clap::Parser;
use fileio_bridge::error::{FileIoBridgeError, Result, TransportError};
use fileio_bridge::server::handle_line;
use fileio_bridge::transport::StdioTransport;

#[derive(Parser)]
#[command(name = "fileio-bridge")]
#[command(about = "Line-oriented stdio file server")]
#[command(
    long_about = "fileio-bridge reads one JSON request per line from stdin, performs the requested file read or write, and emits one JSON response per line on stdout.\n\nRequests look like:\n  {\"operation\":\"read\",\"path\":\"/some/file\"}\n  {\"operation\":\"write\",\"path\":\"/some/file\",\"content\":\"...\"}"
)]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    run_stdio_server().await
}

async fn run_stdio_server() -> Result<()> {
    let mut transport = StdioTransport::new();

    loop {
        let line = match transport.read_line().await {
            Ok(line) => line,
            // Clean shutdown: end-of-input, nothing more to answer.
            Err(FileIoBridgeError::Transport(TransportError::ConnectionClosed)) => break,
            // Undecodable stdin is not a clean EOF; let the exit status say so.
            Err(e) => {
                eprintln!("Error reading request line: {}", e);
                return Err(e);
            }
        };

        // Every input line gets exactly one response, blank lines included.
        let response = handle_line(&line);
        let encoded = serde_json::to_string(&response)?;
        transport.write_line(&encoded).await?;
    }

    Ok(())
}
