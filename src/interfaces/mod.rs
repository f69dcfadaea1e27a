//! Host-facing interfaces: CSV seed input and report output for the CLI.

pub mod csv;
