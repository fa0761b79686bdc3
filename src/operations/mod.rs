#![deny(warnings)]

// File I/O operation implementations

pub mod read_file;
pub mod write_file;
