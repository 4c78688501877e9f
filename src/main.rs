//! doxysh — extract `##` doc-comment metadata from shell function definitions.
//!
//! Modes:
//!
//! - **stdin mode**: `doxysh < script.zsh` prints the parsed script
//! - **block mode**: `doxysh --block < comment.txt` prints one comment block's metadata
//! - **file mode**: `doxysh -o docs -f markdown lib/*.zsh ~/.zshrc`

mod logger;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use parser::ParseOptions;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "doxysh",
    about = "Extract ## doc-comment metadata from zsh/bash function definitions"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Comment-marker character; doc lines start with two of them
    #[arg(short = 'm', long, default_value_t = '#')]
    marker: char,

    /// Treat stdin as a single comment block and print its metadata as JSON
    #[arg(long)]
    block: bool,

    /// Debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    let options = ParseOptions { marker: cli.marker };

    if cli.block {
        anyhow::ensure!(
            cli.files.is_empty(),
            "--block reads a single comment block from stdin and takes no files"
        );
        return block_mode(&options);
    }

    if cli.files.is_empty() {
        return stdin_mode(&cli, &options);
    }

    file_mode(&cli, &options)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

/// block mode: stdin is one comment block, metadata JSON goes to stdout.
fn block_mode(options: &ParseOptions) -> Result<()> {
    let input = read_stdin()?;
    let meta = parser::doxygen::parse(&input, options);
    println!(
        "{}",
        serde_json::to_string_pretty(&meta).context("failed to serialize metadata")?
    );
    Ok(())
}

/// stdin mode: read a script from stdin, render to stdout.
fn stdin_mode(cli: &Cli, options: &ParseOptions) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;
    let input = read_stdin()?;

    let script = parser::script::parse(&input, options);
    debug!(functions = script.functions.len(), "parsed stdin");
    print!("{}", renderer.render(&script)?);
    Ok(())
}

/// file mode: process multiple files, write one output per script.
fn file_mode(cli: &Cli, options: &ParseOptions) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_inputs(&cli.files)?;
    // out_path → source, to spot two scripts sharing an output name
    let mut written: HashMap<PathBuf, &Path> = HashMap::new();

    for path in &input_files {
        let script = match parser::parse_file(path, options) {
            Ok(script) => script,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };
        debug!(file = %path.display(), functions = script.functions.len(), "parsed");

        // Nothing to document
        if script.functions.is_empty() {
            continue;
        }

        let name = derive_output_name(path);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        let output = renderer.render(&script)?;

        if let Some(previous) = written.get(&out_path) {
            warn!(
                "{} overwrites output of {}: {}",
                path.display(),
                previous.display(),
                out_path.display()
            );
        }
        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!("wrote {}", out_path.display());
        written.insert(out_path, path);
    }

    Ok(())
}

/// Resolve CLI inputs to a sorted, de-duplicated file list.
///
/// Each input is a file, a directory (scanned for shell sources) or a glob.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            parser::shell_sources_in(path)?
        } else {
            glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file())
                .collect()
        };
        if found.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(found);
    }
    Ok(files.into_iter().collect())
}

/// Output file name (without extension) for a source path.
/// "lib/git.zsh" → "git", "home/.zshrc" → "zshrc"
fn derive_output_name(path: &Path) -> String {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .trim_start_matches('.');
    match filename.rsplit_once('.') {
        Some((stem, ext)) if parser::SUPPORTED_EXTENSIONS.contains(&ext) => stem.to_string(),
        _ => filename.to_string(),
    }
}
