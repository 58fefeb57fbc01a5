//! Command-line front end for worktoken.
//!
//! All codec work happens in the `worktoken` crate; this crate only parses
//! arguments, moves bytes between files and stdio, and reports errors.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
