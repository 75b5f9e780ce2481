//! Facade crate: the decoding library under its short name.
//!
//! Depend on `tmsoap` for the library surface; the `tmsoap-bin` workspace
//! member ships the `tmsoap-decode` command-line tool.

pub use tmsoap_core::*;
