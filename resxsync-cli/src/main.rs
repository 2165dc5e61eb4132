use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use resxsync::{SyncReport, SyncRequest, sync_files};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Synchronize a generated accessor file with its .resx resource file.
    Sync {
        /// The .resx resource file declaring the localization keys
        #[arg(short, long)]
        resource: PathBuf,

        /// The generated accessor file to update in place
        #[arg(short, long)]
        generated: PathBuf,

        /// Compute and report missing keys without writing
        #[arg(long)]
        dry_run: bool,

        /// Write a JSON summary of the run to this path
        #[arg(long)]
        report_json: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.commands {
        Commands::Sync {
            resource,
            generated,
            dry_run,
            report_json,
        } => {
            let request = SyncRequest::new(&resource, &generated).with_dry_run(dry_run);
            let report = match sync_files(&request) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            print_summary(&report, &generated, dry_run);

            if let Some(path) = &report_json {
                if let Err(e) = write_report(path, &request, &report) {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
                println!("Report JSON written: {}", path.display());
            }

            ExitCode::SUCCESS
        }
    }
}

fn print_summary(report: &SyncReport, generated: &Path, dry_run: bool) {
    if report.missing_keys.is_empty() {
        println!("No missing keys found.");
        return;
    }

    println!("Found {} missing keys.", report.missing_count());
    if report.written {
        println!("Updated {}", generated.display());
    } else if dry_run {
        println!("Dry-run mode: no files were written");
    }
}

fn write_report(path: &Path, request: &SyncRequest, report: &SyncReport) -> Result<(), String> {
    let payload = json!({
        "resource": request.resource,
        "generated": request.generated,
        "dry_run": request.dry_run,
        "summary": {
            "missing": report.missing_count(),
            "written": report.written,
        },
        "missing_keys": report.missing_keys,
    });

    let text = serde_json::to_string_pretty(&payload)
        .map_err(|e| format!("Failed to serialize report JSON: {}", e))?;
    std::fs::write(path, text)
        .map_err(|e| format!("Failed to write report JSON '{}': {}", path.display(), e))
}
