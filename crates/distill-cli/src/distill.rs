use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use distill_core::{write_jsonl, SynthesisStudio, DEFAULT_STUDIO_NAME};

#[derive(Args)]
pub struct DistillArgs {
    /// Chat export to distill (one message per line)
    pub input: PathBuf,

    /// Cycle tag stamped onto every echo from this run
    #[arg(long, allow_negative_numbers = true)]
    pub cycle: i64,

    /// Also keep the echoes in the studio's in-memory log
    #[arg(long)]
    pub persist: bool,

    /// Studio name reported in diagnostics
    #[arg(long, default_value = DEFAULT_STUDIO_NAME)]
    pub name: String,
}

pub fn run(args: &DistillArgs) -> Result<ExitCode> {
    if !args.input.is_file() {
        eprintln!("error: input file not found");
        return Ok(ExitCode::from(1));
    }

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut studio = SynthesisStudio::new(args.name.as_str());
    let echoes = studio
        .process_lines(content.lines(), args.cycle, args.persist)
        .context("Failed to distill input")?;

    write_jsonl(std::io::stdout().lock(), &echoes).context("Failed to write echoes")?;

    if args.persist {
        tracing::debug!("Retained {} echoes in {}", studio.echo_log().len(), studio.name());
    }

    Ok(ExitCode::SUCCESS)
}
