use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use glue_last_updated::cli::{
    extract_last_updated, load_glue_client, load_query_parameters, test_connection,
};
use owo_colors::OwoColorize;
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Pull per-table last-updated timestamps out of the AWS Glue metastore
#[derive(Parser)]
#[command(name = "glue-last-updated", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source AWS settings from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one last-updated record per Glue table as NDJSON
    Extract {
        /// YAML file with extractor options (cluster, filters, catalog_id, max_results)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cluster label stamped on every record
        #[arg(long)]
        cluster: Option<String>,

        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = "-")]
        output: String,
    },

    /// Test region and credentials against Glue
    Auth,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load before the logger so LOG_LEVEL can come from the dotenv file
    let dotenv = match dotenvy::from_filename(&cli.env) {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => return Err(e.into()),
    };

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    match dotenv {
        Some(path) => log::debug!("Loaded environment from {}", path.display()),
        None => log::debug!("No dotenv file at {}", cli.env),
    }

    match cli.command {
        Commands::Extract {
            config,
            cluster,
            output,
        } => {
            let params = load_query_parameters(config.as_deref(), cluster)?;
            log::info!(
                "Extracting last-updated times for cluster {} to {}",
                params.cluster().cyan(),
                output.bright_black()
            );
            let client = load_glue_client().await?;
            let count = extract_last_updated(params, client, &output).await?;
            log::info!("Extracted {} table(s)", count);
        }
        Commands::Auth => {
            let client = load_glue_client().await?;
            log::info!("Testing authorization against {}", client.bright_black());
            let visible = test_connection(&client).await?;
            log::info!("First page returned {} table(s)", visible);
        }
    }

    Ok(())
}
