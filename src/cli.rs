//! Command-line interface for ppx-shortcuts.
//!
//! This module handles CLI argument parsing and runs the subcommands against
//! a settings store.

use crate::debug::LogLevel;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use ppx_shortcuts_config::{
    ExtensionSettings, FeatureCategory, FileStorage, Platform, SettingsStore, SettingsUpdate,
    ShortcutId, StorageProvider, display_bindings, get_bindings, shortcut_definition,
    shortcut_definitions,
};
use ppx_shortcuts_keybindings::{
    ShortcutRegistry, binding_from_event, blocks_native_shortcut, conflict_message,
    find_conflicting_shortcut, format_bindings, is_shortcut_dialog_toggle, parse_chord,
};
use std::io::Write;
use std::path::PathBuf;

/// ppx-shortcuts - Keyboard shortcut settings for the Perplexity web UI
#[derive(Parser, Debug)]
#[command(name = "ppx-shortcuts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (default: ~/.config/ppx-shortcuts/storage.json)
    #[arg(long, value_name = "PATH", env = "PPX_SHORTCUTS_STORAGE", global = true)]
    pub storage: Option<PathBuf>,

    /// Platform whose modifier conventions apply (default: this machine's)
    #[arg(long, value_name = "PLATFORM", global = true)]
    pub platform: Option<Platform>,

    /// Log verbosity (overrides DEBUG_LEVEL)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show feature switches and the effective binding of every shortcut
    List {
        /// Print the full settings record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Bind a shortcut to a chord such as "Mod+Shift+O" or "Alt+[KeyK]"
    Set {
        shortcut: ShortcutId,
        chord: String,

        /// Add the chord next to the current bindings instead of replacing them
        #[arg(short, long)]
        append: bool,
    },
    /// Restore a shortcut's default binding
    Clear { shortcut: ShortcutId },
    /// Turn a feature category on or off
    Toggle { feature: FeatureCategory, state: Switch },
    /// Restore every setting to its default
    Reset,
    /// Show what a key press would trigger
    Match { chord: String },
}

/// On/off argument for `toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

impl Cli {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn storage(&self) -> Result<FileStorage> {
        match &self.storage {
            Some(path) => Ok(FileStorage::new(path)),
            None => FileStorage::at_default_location().context("No settings location"),
        }
    }
}

/// Run the parsed command against the settings file, writing to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let store = SettingsStore::with_platform(cli.storage()?, cli.platform());
    log::info!(
        "Using settings at {} ({})",
        store.storage().path().display(),
        store.platform()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &store, &mut out).await
}

/// Run one command against `store`.
pub async fn execute<S, W>(command: &Commands, store: &SettingsStore<S>, out: &mut W) -> Result<()>
where
    S: StorageProvider,
    W: Write,
{
    let platform = store.platform();

    match command {
        Commands::List { json } => {
            let settings = load_or_default(store).await;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
            } else {
                write_listing(out, &settings, platform)?;
            }
        }
        Commands::Set {
            shortcut,
            chord,
            append,
        } => {
            let chord = parse_chord(chord)?;
            let event = chord.to_key_input(platform);
            let binding = match binding_from_event(&event, platform) {
                Ok(Some(binding)) => binding,
                Ok(None) => bail!("\"{chord}\" has no key besides modifiers"),
                Err(rejected) => bail!(rejected.message(platform)),
            };

            let settings = load_or_default(store).await;
            if let Some(owner) = find_conflicting_shortcut(&binding, *shortcut, &settings, platform)
            {
                bail!(conflict_message(&binding, owner, platform));
            }

            let mut bindings = if *append {
                get_bindings(*shortcut, &settings, platform).to_vec()
            } else {
                Vec::new()
            };
            bindings.push(binding);
            store
                .save(SettingsUpdate::new().with_shortcut(*shortcut, bindings))
                .await
                .context("Failed to save settings")?;

            let settings = store.load().await?;
            writeln!(
                out,
                "{shortcut}: {}",
                format_bindings(get_bindings(*shortcut, &settings, platform), platform)
            )?;
        }
        Commands::Clear { shortcut } => {
            store
                .save(SettingsUpdate::new().with_shortcut(*shortcut, Vec::new()))
                .await
                .context("Failed to save settings")?;
            let defaults = &shortcut_definition(*shortcut, platform).default_bindings;
            writeln!(
                out,
                "{shortcut}: {} (default)",
                format_bindings(defaults, platform)
            )?;
        }
        Commands::Toggle { feature, state } => {
            store
                .save(SettingsUpdate::new().with_feature(*feature, state.is_on()))
                .await
                .context("Failed to save settings")?;
            writeln!(out, "{feature}: {}", on_off(state.is_on()))?;
        }
        Commands::Reset => {
            store.reset().await.context("Failed to reset settings")?;
            writeln!(out, "All settings restored to defaults")?;
        }
        Commands::Match { chord } => {
            let event = parse_chord(chord)?.to_key_input(platform);
            let settings = load_or_default(store).await;
            let registry = ShortcutRegistry::from_settings(&settings, platform);

            if let Some(action) = registry.safe_send_action(&event) {
                writeln!(out, "safe send: {action:?}")?;
            }
            if is_shortcut_dialog_toggle(&event, platform) {
                writeln!(out, "toggles the page's shortcut dialog")?;
            }
            if blocks_native_shortcut(&event, platform) {
                writeln!(out, "blocks the page's own shortcut")?;
            }
            match registry.lookup(&event) {
                Some(id) => writeln!(
                    out,
                    "{id} ({})",
                    shortcut_definition(id, platform).label
                )?,
                None => writeln!(out, "no shortcut")?,
            }
        }
    }

    Ok(())
}

/// Stored settings, or defaults when they cannot be read.
async fn load_or_default<S: StorageProvider>(store: &SettingsStore<S>) -> ExtensionSettings {
    match store.load().await {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings, using defaults: {e}");
            ExtensionSettings::defaults(store.platform())
        }
    }
}

fn write_listing<W: Write>(
    out: &mut W,
    settings: &ExtensionSettings,
    platform: Platform,
) -> Result<()> {
    for category in FeatureCategory::ALL {
        writeln!(
            out,
            "{} [{category}]: {}",
            category.label(),
            on_off(settings.feature_toggles.is_enabled(category))
        )?;
        for def in shortcut_definitions(platform)
            .iter()
            .filter(|def| def.category == category)
        {
            let shown = format_bindings(display_bindings(def.id, settings, platform), platform);
            writeln!(out, "  {:<20} {:<28} {}", def.id.as_str(), def.label, shown)?;
        }
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
