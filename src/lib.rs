// Library exports for the binary and integration tests.
//
// Settings types and storage live in `ppx-shortcuts-config`; matching,
// capture and display live in `ppx-shortcuts-keybindings`. This crate only
// adds the command-line front end and its logging backend.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
