//! Output module
//! Formats analysis reports for the console, JSON consumers, and files

pub mod formatter;
