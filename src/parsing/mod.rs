//! Parsers for launch-record input files.

pub mod csv_parser;
