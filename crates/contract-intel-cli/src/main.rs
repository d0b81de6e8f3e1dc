use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use contract_intel_cli::{serve, telemetry::init_tracing, Settings};
use contract_intel_core::{render_report, ContractAnalyzer, OutputFormat, AGENTS};
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(
    name = "contract-intel",
    author,
    version,
    about = "Rule-based contract analysis CLI and API server"
)]
struct Cli {
    /// Optional settings file (TOML, YAML or JSON)
    #[arg(long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address, overriding the configured `bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Analyze a contract file, or stdin when no file is given
    Analyze {
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = FormatArg::Human)]
        format: FormatArg,
    },
    /// List all analyzers in pipeline order
    ListAgents {
        /// Emit descriptors as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Human,
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    init_tracing(settings.log_json);

    match cli.command.unwrap_or(Commands::ListAgents { json: false }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                settings.bind = bind;
            }
            let analyzer = build_analyzer(&settings)?;
            serve(&settings, analyzer).await?;
        }
        Commands::Analyze { file, format } => {
            let analyzer = build_analyzer(&settings)?;
            let text = read_contract(file.as_deref()).await?;
            let report = analyzer.analyze(&text);
            print!("{}", render_report(&report, format.into())?);
        }
        Commands::ListAgents { json } => list_agents(json)?,
    }
    Ok(())
}

fn build_analyzer(settings: &Settings) -> Result<Arc<ContractAnalyzer>> {
    let analyzer = ContractAnalyzer::with_config(settings.analyzer_config())
        .context("failed to build contract analyzers")?;
    Ok(Arc::new(analyzer))
}

async fn read_contract(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read contract from {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read contract from stdin")?;
            Ok(text)
        }
    }
}

fn list_agents(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(AGENTS)?);
        return Ok(());
    }

    println!("{} agent(s) in pipeline order", AGENTS.len());
    for (idx, agent) in AGENTS.iter().enumerate() {
        println!(
            "{step:>2}. {name:<24} {job}",
            step = idx + 1,
            name = agent.name,
            job = agent.job
        );
    }
    Ok(())
}
