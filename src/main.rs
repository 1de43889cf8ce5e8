use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_text_extractor::cli;
use pdf_text_extractor::config::{Config, LogFormat};
use pdf_text_extractor::services::HttpExtractionClient;
use pdf_text_extractor::UploadController;

/// Upload a PDF to the extraction service and print the extracted text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// PDF file to upload
    file: Option<PathBuf>,

    /// Upload endpoint (overrides EXTRACTION_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Transport timeout in seconds (overrides REQUEST_TIMEOUT_SECONDS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Read commands from stdin instead of uploading once
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    init_tracing(LogFormat::from_env());

    let config = Config::from_env().with_overrides(args.endpoint.clone(), args.timeout);
    config.validate()?;

    tracing::info!("Starting PDF Text Extractor");
    tracing::info!("Upload endpoint: {}", config.endpoint);

    let client = HttpExtractionClient::new(&config)?;
    let controller = UploadController::new(client);
    let stdout = io::stdout();

    if args.interactive {
        let input = BufReader::new(tokio::io::stdin());
        cli::run_interactive(&controller, args.file.as_deref(), input, &mut stdout.lock()).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(path) = args.file.as_deref() else {
        anyhow::bail!("no PDF file given (pass a path or use --interactive)");
    };
    match cli::run_once(&controller, path, &mut stdout.lock()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!(error_code = e.error_code(), "Run finished with an error");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pdf_text_extractor=info".into());

    // Logs go to stderr; stdout carries only the rendered form.
    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
