//! datatree CLI - layer JSON/YAML documents from the command line
//!
//! Decodes documents with the datatree decoders, merges them left to right
//! and prints JSON. Useful for resolving a base config plus per-environment
//! overlays into a single file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use datatree::{decoder_for_path, merge_all, Node, PathKey};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datatree")]
#[command(about = "Merge, query and compare JSON/YAML data trees")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge documents left to right (later files win) and print the result
    Merge {
        /// Documents to merge, lowest precedence first
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the scalar at a path; exits 1 if the path names no leaf
    Get {
        /// Document to read
        file: PathBuf,

        /// Path segments; an integer indexes a sequence, anything under a mapping is a key
        #[arg(required = true)]
        path: Vec<String>,
    },

    /// Compare two documents structurally; exits 1 if they differ
    Eq {
        /// First document
        left: PathBuf,

        /// Second document
        right: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Merge { files, pretty } => {
            let mut layers = Vec::with_capacity(files.len());
            for file in &files {
                match load(file)? {
                    Some(tree) => layers.push(tree),
                    None => debug!(file = %file.display(), "document holds no data, skipping"),
                }
            }
            info!(layers = layers.len(), "merging documents");

            let merged = merge_all(&layers).unwrap_or_else(Node::null);
            let bytes = if pretty {
                merged.to_json_pretty()?
            } else {
                merged.to_json()?
            };
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            writeln!(stdout)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Get { file, path } => {
            let tree = load(&file)?;
            let keys = match &tree {
                Some(t) => resolve_path(t, &path),
                None => Vec::new(),
            };
            match tree.as_ref().and_then(|t| t.lookup(&keys)) {
                Some(scalar) => {
                    println!("{}", serde_json::to_string(scalar)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    debug!(path = ?keys, "lookup found no leaf");
                    eprintln!("not found: {}", path.join("."));
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::Eq { left, right } => {
            let equal = match (load(&left)?, load(&right)?) {
                (Some(a), Some(b)) => datatree::compare(&a, &b),
                (None, None) => true,
                _ => false,
            };
            println!("{}", equal);
            Ok(if equal {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Decode a document, choosing the format from its extension.
fn load(path: &Path) -> Result<Option<Node>> {
    let decoder = decoder_for_path(path)
        .ok_or_else(|| anyhow!("unsupported file type: {}", path.display()))?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(file = %path.display(), format = decoder.name(), "decoding");
    decoder
        .decode(&text)
        .with_context(|| format!("failed to decode {}", path.display()))
}

/// Turn command line segments into path keys, following `tree` as it goes.
///
/// A segment is an index only where the node it applies to is a sequence,
/// so mapping keys such as `"80"` stay reachable.
fn resolve_path(tree: &Node, segments: &[String]) -> Vec<PathKey> {
    let mut keys = Vec::with_capacity(segments.len());
    let mut current = Some(tree);
    for segment in segments {
        let key = match (current, segment.parse::<i64>()) {
            (Some(Node::Sequence(_)), Ok(i)) => PathKey::Index(i),
            _ => PathKey::from(segment.as_str()),
        };
        current = current.and_then(|node| node.child(&key));
        keys.push(key);
    }
    keys
}
