#![deny(warnings)]

// Library crate for fileio-bridge

pub mod error;
pub mod operations;
pub mod server;
pub mod transport;
