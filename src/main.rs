use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

use yt_dashboard::config::{Config, DocStoreConfig};
use yt_dashboard::error::DashboardError;
use yt_dashboard::logging;
use yt_dashboard::observability::metrics;
use yt_dashboard::report::{render_text, ReportBuilder, ReportOptions};
use yt_dashboard::source::{CachedSource, DocStoreSource, RecordSource};
use yt_dashboard::web::{router::app_router, state::AppState};

#[derive(Parser)]
#[command(name = "yt_dashboard")]
#[command(about = "Reporting dashboard over crawled YouTube metadata")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web dashboard
    Serve {
        /// Port to bind (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,
        /// Collection to report over (overrides config.toml)
        #[arg(long)]
        collection: Option<String>,
    },
    /// Print a one-shot summary report to the terminal
    Report {
        /// Collection to report over (overrides config.toml)
        #[arg(long)]
        collection: Option<String>,
    },
}

fn report_builder(config: &Config, collection: Option<String>) -> Result<ReportBuilder, DashboardError> {
    let docstore = DocStoreSource::new(DocStoreConfig::from_env()?);
    let source: Arc<dyn RecordSource> = Arc::new(CachedSource::new(
        Arc::new(docstore),
        Duration::from_secs(config.cache_ttl_secs),
    ));
    let collection = collection.unwrap_or_else(|| config.collection.clone());
    Ok(ReportBuilder::new(source, collection, ReportOptions::from(config)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { port, collection } => {
            if let Some(metrics_port) = config.metrics_port {
                metrics::install_prometheus_exporter(metrics_port)?;
            }

            let builder = report_builder(&config, collection)?;
            let state = AppState {
                report: Arc::new(builder),
            };
            let app = app_router(state);

            let port = port.unwrap_or(config.port);
            let bind_addr = format!("0.0.0.0:{}", port);
            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            println!(
                "Dashboard listening on {} (visit http://127.0.0.1:{})",
                bind_addr, port
            );
            axum::serve(listener, app).await?;
        }
        Commands::Report { collection } => {
            let builder = report_builder(&config, collection)?;
            match builder.build().await {
                Ok(report) => print!("{}", render_text(&report)),
                Err(DashboardError::NoData) => {
                    println!("ℹ️  No documents in the collection yet - nothing to report.");
                }
                Err(e) => {
                    error!("Report failed: {}", e);
                    eprintln!("❌ Report failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
