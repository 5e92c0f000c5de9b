use clap::Parser;
use color_eyre::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mockdata_exporter::export::{available_formats, write_export, ExportFormat};
use mockdata_exporter::model::Dataset;

#[derive(Parser, Debug)]
#[command(name = "mockdata-exporter")]
#[command(about = "Export a generated mock dataset as JSON, CSV, Markdown or SQL")]
#[command(version)]
struct Args {
    /// Path to dataset JSON (`{"fields": [...], "data": [...]}`)
    #[arg(required_unless_present = "list_formats")]
    dataset: Option<PathBuf>,

    /// Output format: csv, json, markdown (md) or sql
    #[arg(short, long, default_value = "json")]
    format: ExportFormat,

    /// Table name for SQL exports (defaults to mock_data)
    #[arg(long, env = "MOCKDATA_TABLE", default_value = "")]
    table: String,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Dataset id; writes to mockdata-<ID>.<ext> when no output is given
    #[arg(long)]
    id: Option<String>,

    /// Print the supported formats and exit
    #[arg(long)]
    list_formats: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_formats {
        for format in available_formats() {
            println!("{format}");
        }
        return Ok(());
    }

    let Some(dataset_path) = &args.dataset else {
        return Err(color_eyre::eyre::eyre!("a dataset path is required"));
    };

    let dataset = Dataset::from_file(dataset_path)?;
    tracing::info!(
        rows = dataset.len(),
        fields = dataset.fields.len(),
        format = %args.format,
        "loaded dataset"
    );

    let bytes = args.format.render(&dataset, &args.table)?;

    let output = args
        .output
        .clone()
        .or_else(|| args.id.as_deref().map(|id| PathBuf::from(args.format.file_name(id))));

    if let Some(path) = output {
        write_export(&bytes, &path)?;
        eprintln!(
            "Exported to {} ({}): {}",
            args.format,
            args.format.content_type(),
            path.display()
        );
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
    }

    Ok(())
}
