use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "framegrid",
    version,
    about = "Convert a directory of PNG images into one 64x64 RGBA frame dataset (JSON)"
)]
struct Cli {
    /// Input directory to scan (non-recursive).
    input_dir: PathBuf,

    /// Output JSON path.
    #[arg(long, default_value = framegrid::DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Worker pool size. Default: detected hardware parallelism.
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let opts = framegrid::PipelineOptions {
        workers: cli.workers,
        ..framegrid::PipelineOptions::default()
    };

    let (store, stats) = framegrid::convert_directory(&cli.input_dir, &opts)?;
    framegrid::write_document(&store, &cli.out)?;

    eprintln!(
        "wrote {} ({} frames, {} failed)",
        cli.out.display(),
        stats.frames_total,
        stats.frames_failed
    );
    Ok(())
}
