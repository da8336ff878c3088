//! modsettings CLI
//!
//! Inspect and edit mod settings from a shell.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use modsettings::{Config, JsonStyle, SettingsStore};
use tracing_subscriber::{fmt, EnvFilter};

/// modsettings CLI
#[derive(Parser, Debug)]
#[command(name = "modsettings")]
#[command(about = "Inspect and edit per-mod JSON settings")]
#[command(version)]
struct Args {
    /// Persistent data root (defaults to the platform data directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Settings folder under the data root
    #[arg(short, long, default_value = modsettings::config::DEFAULT_FOLDER_NAME)]
    folder: String,

    /// Write indented JSON
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the file path of a setting
    Path {
        /// Mod identifier
        mod_id: String,

        /// Setting name
        name: String,
    },

    /// Print a stored setting
    Get {
        /// Mod identifier
        mod_id: String,

        /// Setting name
        name: String,
    },

    /// Store a setting from JSON text
    Set {
        /// Mod identifier
        mod_id: String,

        /// Setting name
        name: String,

        /// JSON document to store
        json: String,
    },

    /// Delete a setting
    Rm {
        /// Mod identifier
        mod_id: String,

        /// Setting name
        name: String,
    },

    /// List mods, or the settings of one mod
    List {
        /// Mod identifier
        mod_id: Option<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,modsettings=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let style = if args.pretty {
        JsonStyle::Pretty
    } else {
        JsonStyle::Compact
    };

    let mut builder = Config::builder().folder_name(&args.folder).json_style(style);
    if let Some(root) = &args.root {
        builder = builder.data_root(root);
    }
    let store = SettingsStore::open(builder.build());

    tracing::debug!("Using settings directory {}", store.base_dir().display());

    if let Err(e) = run(&store, args.command) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(store: &SettingsStore, command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Path { mod_id, name } => {
            println!("{}", store.path(&mod_id, &name).display());
        }
        Commands::Get { mod_id, name } => {
            let value: serde_json::Value = store.load(&mod_id, &name)?;
            println!("{}", modsettings::codec::encode(&value, JsonStyle::Pretty)?);
        }
        Commands::Set { mod_id, name, json } => {
            let value: serde_json::Value = serde_json::from_str(&json)
                .map_err(|e| format!("Invalid JSON for {}/{}: {}", mod_id, name, e))?;
            store.save(&mod_id, &name, &value)?;
            tracing::info!("Saved {}", store.path(&mod_id, &name).display());
        }
        Commands::Rm { mod_id, name } => {
            if store.remove(&mod_id, &name)? {
                tracing::info!("Removed {}/{}", mod_id, name);
            } else {
                tracing::warn!("{}/{} was not set", mod_id, name);
            }
        }
        Commands::List { mod_id: None } => {
            for name in store.list_mods()? {
                println!("{}", name);
            }
        }
        Commands::List { mod_id: Some(mod_id) } => {
            for name in store.list_settings(&mod_id)? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
