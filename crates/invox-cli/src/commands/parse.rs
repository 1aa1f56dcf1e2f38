//! Parse command - extract structured updates from a single transcript.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use invox_core::{CommandParser, ParseOutcome, VoiceCommandParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Transcript text (reads stdin when omitted and --file is not set)
    transcript: Option<String>,

    /// Read the transcript from a file
    #[arg(short, long, conflicts_with = "transcript")]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let transcript = read_transcript(&args)?;
    debug!("transcript: {transcript:?}");

    let parser = VoiceCommandParser::new();
    let outcome = parser.parse(&transcript);

    if outcome.is_empty() {
        eprintln!(
            "{} no recognizable command in transcript",
            style("!").yellow()
        );
    }

    let rendered = format_outcome(&outcome, args.format, args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!(
                "{} output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn read_transcript(args: &ParseArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.transcript {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub fn format_outcome(
    outcome: &ParseOutcome,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
        OutputFormat::Text => Ok(format_text(outcome)),
    }
}

fn format_text(outcome: &ParseOutcome) -> String {
    let mut output = String::new();

    if !outcome.updates.is_empty() {
        output.push_str("Field updates:\n");
        for (path, value) in &outcome.updates {
            output.push_str(&format!("  {path} = {value}\n"));
        }
    }

    if !outcome.new_items.is_empty() {
        output.push_str("New items:\n");
        for item in &outcome.new_items {
            output.push_str(&format!(
                "  {}. {} (hsn: {}, qty: {}, price: {}, igst: {}, cgst: {}, sgst: {})\n",
                item.id,
                item.description,
                if item.hsn.is_empty() { "-" } else { &item.hsn },
                item.quantity,
                item.price,
                item.igst,
                item.cgst,
                item.sgst,
            ));
        }
    }

    if outcome.is_empty() {
        output.push_str("Nothing recognized.\n");
    }

    output
}
