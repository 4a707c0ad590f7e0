use clap::{Parser, Subcommand};

mod ingest;
mod render;
mod report;
mod store;
mod view;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "loglens")]
#[command(about = "Interactive viewer for JSON log and performance report files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an interactive HTML viewer from one or more report files.
    View {
        /// Input .json report files, opened as tabs in the given order.
        files: Vec<String>,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loglens=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::View { files, out } => {
            if files.is_empty() {
                anyhow::bail!("no log files selected; pass one or more .json report files");
            }

            // 1) Read the selected files into named buffers.
            use anyhow::Context;
            let mut sources = Vec::new();
            for path in &files {
                let bytes =
                    std::fs::read(path).with_context(|| format!("read report file {}", path))?;
                let name = std::path::Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                sources.push(ingest::SourceFile::new(name, bytes));
            }

            // 2) Ingest the batch: sequential, per-file failures recorded.
            let mut store = store::ReportStore::new();
            let outcome = ingest::ingest_batch(&mut store, sources);

            // 3) Build view models.
            let data = view::build_viewer_data(&store, &outcome.errors);

            // 4) Render HTML.
            let html = render::render_html_viewer(&data)?;
            std::fs::write(&out, html)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
