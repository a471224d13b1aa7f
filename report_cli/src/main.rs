use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use report_synth::{RecordOptions, SynthesisOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod snapshot;

#[derive(Debug, Parser)]
#[command(name = "report")]
#[command(about = "Assessment report generator CLI", long_about = None)]
struct Cli {
    /// Log progress to stderr; RUST_LOG takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the report for an assessment record.
    Report {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Rebuild even if the record already holds a report.
        #[arg(long)]
        regenerate: bool,
        /// Store the report inside the record instead of a separate file.
        #[arg(long, conflicts_with = "output")]
        update_record: bool,
        /// Fixed generation time (RFC 3339), for reproducible output.
        #[arg(long)]
        generated_at: Option<DateTime<Utc>>,
    },
    /// Print a plain-text view of the report.
    Show { input: PathBuf },
    /// Print the headline score per area.
    Snapshot { input: PathBuf },
    /// Print the age-scaled game plan as JSON.
    Plan { age: u32 },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Report {
            input,
            output,
            regenerate,
            update_record,
            generated_at,
        } => {
            let mut record = assessment_loader::load_record_from_path(&input)?;
            let options = RecordOptions {
                synthesis: SynthesisOptions {
                    assessment_date: None,
                    generated_at,
                },
                regenerate,
            };
            let report = report_synth::generate_for_record(&record, &options)
                .with_context(|| format!("report generation failed: {}", input.display()))?;

            if update_record {
                record.attach_report(report);
                assessment_loader::save_record_to_path(&record, &input)?;
                info!(path = %input.display(), "stored report in record");
            } else {
                let json =
                    serde_json::to_string_pretty(&report).context("failed to serialize report")?;
                let out_path = output.unwrap_or_else(|| default_output_path(&input));
                fs::write(&out_path, json)
                    .with_context(|| format!("failed to write: {}", out_path.display()))?;
                info!(path = %out_path.display(), "wrote report");
            }
        }
        Command::Show { input } => {
            let record = assessment_loader::load_record_from_path(&input)?;
            let report = report_synth::generate_for_record(&record, &RecordOptions::default())
                .with_context(|| format!("report generation failed: {}", input.display()))?;
            println!("{}", report_synth::render_text(&report));
        }
        Command::Snapshot { input } => {
            let record = assessment_loader::load_record_from_path(&input)?;
            snapshot::print_snapshot(&record);
        }
        Command::Plan { age } => {
            let plan = report_synth::plan_for_age(age);
            let json = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_output_path(input: &Path) -> PathBuf {
    let mut out = input.to_path_buf();
    out.set_extension("report.json");
    out
}
