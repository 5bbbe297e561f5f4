use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};

use inistore::{IniDocument, IniValue};

/// Inspect and edit INI configuration files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the sections of a file
    Sections {
        /// Path to the INI file
        file: PathBuf,
    },

    /// List the keys of a section
    Keys { file: PathBuf, section: String },

    /// Print a value converted to the requested type
    Get {
        file: PathBuf,
        section: String,
        key: String,

        /// Type to read the value as
        #[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,

        /// Value printed when the key is missing or cannot be converted
        #[arg(short, long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Set a value and save the file
    Set {
        file: PathBuf,
        section: String,
        key: String,
        value: String,

        /// Save to this path instead of overwriting FILE
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },

    /// Print the whole document as JSON
    Dump { file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ValueKind {
    String,
    Int,
    Float,
    Bool,
}

fn load(file: &Path) -> Result<IniDocument> {
    IniDocument::from_file(file).with_context(|| format!("failed to load {}", file.display()))
}

/// Read a value as `T`, using `default` (parsed the same way) when given
fn read_typed<T>(doc: &IniDocument, section: &str, key: &str, default: Option<&str>) -> String
where
    T: IniValue + Default,
{
    let fallback = default.and_then(T::from_ini).unwrap_or_default();
    doc.read(section, key, fallback).to_ini()
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Sections { file } => {
            for section in load(&file)?.sections() {
                println!("{}", section);
            }
        }
        Command::Keys { file, section } => {
            for key in load(&file)?.keys(&section) {
                println!("{}", key);
            }
        }
        Command::Get {
            file,
            section,
            key,
            kind,
            default,
        } => {
            let doc = load(&file)?;
            let default = default.as_deref();
            let value = match kind {
                ValueKind::String => read_typed::<String>(&doc, &section, &key, default),
                ValueKind::Int => read_typed::<i64>(&doc, &section, &key, default),
                ValueKind::Float => read_typed::<f64>(&doc, &section, &key, default),
                ValueKind::Bool => read_typed::<bool>(&doc, &section, &key, default),
            };
            println!("{}", value);
        }
        Command::Set {
            file,
            section,
            key,
            value,
            output,
        } => {
            let mut doc = load(&file)?;
            doc.set(&section, &key, &value)?;

            let target = output.unwrap_or(file);
            doc.save(&target)?;
            info!("Wrote [{}] {} to {}", section, key, target.display());
        }
        Command::Dump { file } => {
            let doc = load(&file)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
