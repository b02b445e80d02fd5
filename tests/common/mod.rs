//! Shared integration test helpers for ppx-shortcuts.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{file_store, run_command};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use clap::Parser;
use ppx_shortcuts::cli::{Cli, execute};
use ppx_shortcuts_config::{FileStorage, Platform, SettingsStore, StorageProvider};
use tempfile::TempDir;

/// A settings store backed by a file inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn file_store(platform: Platform) -> (SettingsStore<FileStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path().join("nested").join("storage.json"));
    (SettingsStore::with_platform(storage, platform), temp_dir)
}

/// Parse `args` as a command line and run it against `store`, returning
/// what it printed.
pub async fn run_command<S: StorageProvider>(
    store: &SettingsStore<S>,
    args: &[&str],
) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("ppx-shortcuts").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    execute(&cli.command, store, &mut out).await?;
    Ok(String::from_utf8(out)?)
}
