//! Batch command - parse a file of transcripts, one per line.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use invox_core::{CommandParser, VoiceCommandParser};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input file with one transcript per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for JSON Lines results (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a CSV summary (line, updates, items)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Skip transcripts that produce no recognized content
    #[arg(long)]
    skip_empty: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.input)?;
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("no transcripts found in {}", args.input.display());
    }

    eprintln!(
        "{} parsing {} transcript(s)",
        style("ℹ").blue(),
        lines.len()
    );

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} transcripts")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = VoiceCommandParser::new();
    let mut results = Vec::with_capacity(lines.len());
    let mut summary_rows = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let outcome = parser.parse(line);
        debug!(
            "line {}: {} update(s), {} item(s)",
            i + 1,
            outcome.updates.len(),
            outcome.new_items.len()
        );

        summary_rows.push((i + 1, outcome.updates.len(), outcome.new_items.len()));

        if !(args.skip_empty && outcome.is_empty()) {
            results.push(serde_json::to_string(&outcome)?);
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let body = results.join("\n");
    match &args.output {
        Some(path) => {
            fs::write(path, body + "\n")?;
            println!(
                "{} results written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => {
            if !body.is_empty() {
                println!("{body}");
            }
        }
    }

    if let Some(path) = &args.summary {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["line", "updates", "items"])?;
        for (line, updates, items) in summary_rows {
            writer.write_record([line.to_string(), updates.to_string(), items.to_string()])?;
        }
        writer.flush()?;
        println!(
            "{} summary written to {}",
            style("✓").green(),
            path.display()
        );
    }

    Ok(())
}
