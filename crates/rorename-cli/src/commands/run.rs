//! Run command - process every matching PDF in a folder.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use clap::Args;
use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use rorename_core::batch::{self, BatchProcessor, log_stats, select_documents};
use rorename_core::models::config::RorenameConfig;
use rorename_core::{CollisionPolicy, PdfTextSource, Status, write_report};

/// File with the fallback folder, looked up in the working directory.
const DEFAULT_PATH_FILE: &str = "default_path.txt";

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Folder containing the scanned PDFs
    folder: Option<PathBuf>,

    /// Summary report path (default: <folder>/summary_<timestamp>.json)
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// What to do when the target file name already exists
    #[arg(long, value_enum)]
    on_collision: Option<CollisionArg>,

    /// Keep the summary file without asking
    #[arg(long, conflicts_with = "delete_summary")]
    keep_summary: bool,

    /// Delete the summary file after the run without asking
    #[arg(long)]
    delete_summary: bool,

    /// Never prompt, use defaults
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CollisionArg {
    /// Leave both files and record a rename error
    Fail,
    /// Replace the existing file
    Overwrite,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Fail => CollisionPolicy::Fail,
            CollisionArg::Overwrite => CollisionPolicy::Overwrite,
        }
    }
}

pub fn run(args: RunArgs, config: &RorenameConfig) -> anyhow::Result<()> {
    let start = Instant::now();
    let interactive = !args.no_prompt && console::user_attended() && std::io::stdin().is_terminal();

    let folder = match &args.folder {
        Some(folder) => folder.clone(),
        None => {
            let default = resolve_default_folder(config);
            if interactive {
                prompt_folder(&default)?
            } else {
                default
            }
        }
    };

    if !folder.is_dir() {
        anyhow::bail!("The folder path '{}' does not exist.", folder.display());
    }

    let summary_path = args.summary.clone().unwrap_or_else(|| {
        batch::default_report_path(&folder, &config.batch.summary_prefix, Local::now())
    });
    let on_collision = args
        .on_collision
        .map(CollisionPolicy::from)
        .unwrap_or(config.batch.on_collision);

    info!("Processing folder: {}", folder.display());
    let selection = select_documents(&folder)
        .with_context(|| format!("Failed to list {}", folder.display()))?;

    println!(
        "{} Found {} matching files in {}",
        style("ℹ").blue(),
        selection.documents.len(),
        folder.display()
    );

    let pb = if Term::stderr().is_term() {
        ProgressBar::new(selection.documents.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let processor = BatchProcessor::new(PdfTextSource).with_collision_policy(on_collision);
    let report = processor.process_selection(&selection, |_, _| pb.inc(1));
    pb.finish_and_clear();

    write_report(&summary_path, &report.entries)?;
    log_stats(&report.stats);

    // Print summary
    println!();
    for entry in &report.entries {
        let marker = if entry.status.is_success() {
            style("✓").green()
        } else {
            style("✗").red()
        };
        match &entry.new_filename {
            Some(new_name) => println!("  {} {} -> {}", marker, entry.original_filename, new_name),
            None => println!("  {} {}: {}", marker, entry.original_filename, entry.status),
        }
    }
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.entries.len(),
        start.elapsed()
    );
    println!(
        "   {} renamed, {} failed to extract, {} rename errors",
        style(report.renamed()).green(),
        style(report.count(Status::ExtractionFailed)).yellow(),
        style(report.count(Status::RenameFailed)).red()
    );

    retain_summary(&summary_path, &args, interactive)
}

/// Folder used when none was given: config, then `default_path.txt`, then the
/// working directory.
fn resolve_default_folder(config: &RorenameConfig) -> PathBuf {
    if let Some(folder) = &config.default_folder {
        if folder.is_dir() {
            return folder.clone();
        }
        warn!("Configured default folder does not exist: {}", folder.display());
    }

    read_default_path(Path::new(DEFAULT_PATH_FILE))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// First non-empty, non-comment line of `file`, if it names an existing directory.
fn read_default_path(file: &Path) -> Option<PathBuf> {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read '{}': {}", file.display(), e);
            return None;
        }
    };

    let Some(line) = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
    else {
        warn!("No valid paths found in '{}'", file.display());
        return None;
    };

    let path = PathBuf::from(line);
    if path.is_dir() {
        Some(path)
    } else {
        warn!("The path in '{}' does not exist: {}", file.display(), line);
        None
    }
}

fn prompt_folder(default: &Path) -> anyhow::Result<PathBuf> {
    let term = Term::stdout();
    term.write_line(&format!("Default folder path: {}", default.display()))?;
    term.write_str("Press Enter to use the default path, or provide a different folder path: ")?;
    let input = term.read_line()?;

    let input = strip_quotes(&input);
    if input.is_empty() {
        Ok(default.to_path_buf())
    } else {
        Ok(PathBuf::from(input))
    }
}

/// Drop surrounding whitespace and quotes, as pasted paths often carry them.
fn strip_quotes(input: &str) -> &str {
    input.trim().trim_matches('"').trim_matches('\'')
}

fn retain_summary(path: &Path, args: &RunArgs, interactive: bool) -> anyhow::Result<()> {
    let delete = if args.delete_summary {
        true
    } else if args.keep_summary || !interactive {
        false
    } else {
        let term = Term::stdout();
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        term.write_str(&format!(
            "Processing complete. Do you want to delete the summary file ({})? (y/n): ",
            name
        ))?;
        term.read_line()?.trim().eq_ignore_ascii_case("y")
    };

    if delete {
        match fs::remove_file(path) {
            Ok(()) => println!("{} Summary file deleted.", style("✓").green()),
            Err(e) => eprintln!("{} Error deleting summary file: {}", style("✗").red(), e),
        }
    } else {
        println!(
            "{} Summary file retained at: {}",
            style("✓").green(),
            path.display()
        );
    }

    Ok(())
}
