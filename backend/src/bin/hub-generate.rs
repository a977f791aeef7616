//! Provision a new hub app client into the static config directory.
//!
//! ```text
//! hub-generate --name "Green Valley Physio" --industry healthcare --access-code VALLEY2025
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use hub_backend::domain::{generate_client, GenerateClientRequest};
use hub_backend::storage::StaticConfigDirectory;
use shared::{Industry, Variation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndustryArg {
    Festival,
    Healthcare,
    Restaurant,
    Property,
    Menu,
}

impl From<IndustryArg> for Industry {
    fn from(arg: IndustryArg) -> Self {
        match arg {
            IndustryArg::Festival => Industry::Festival,
            IndustryArg::Healthcare => Industry::Healthcare,
            IndustryArg::Restaurant => Industry::Restaurant,
            IndustryArg::Property => Industry::Property,
            IndustryArg::Menu => Industry::Menu,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TemplateArg {
    Modern,
    Classic,
    Minimal,
    Vibrant,
}

impl From<TemplateArg> for Variation {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Modern => Variation::Modern,
            TemplateArg::Classic => Variation::Classic,
            TemplateArg::Minimal => Variation::Minimal,
            TemplateArg::Vibrant => Variation::Vibrant,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hub-generate", about = "Create a new hub app client config")]
struct Cli {
    /// Display name; the client id is derived from it
    #[arg(long)]
    name: String,

    #[arg(long, value_enum)]
    industry: IndustryArg,

    /// Code users type to open this client's app
    #[arg(long = "access-code")]
    access_code: String,

    /// Visual variation of the generated config
    #[arg(long, value_enum, default_value = "modern")]
    template: TemplateArg,

    /// Static config directory to write into
    #[arg(long = "config-dir", default_value = "configs")]
    config_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let directory = StaticConfigDirectory::new(&cli.config_dir);
    let request = GenerateClientRequest {
        name: cli.name,
        industry: cli.industry.into(),
        access_code: cli.access_code,
        variation: cli.template.into(),
    };

    match generate_client(&directory, &request).await {
        Ok(generated) => {
            println!("Created client '{}'", generated.client_id);
            println!("  name:        {}", generated.config.name);
            println!("  industry:    {}", request.industry);
            println!("  variation:   {}", request.variation);
            println!("  access code: {}", generated.access_code);
            println!("  config:      {}", generated.config_path.display());
            if let Some(expiry) = &generated.config.expiry {
                println!("  expires:     {}", expiry);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
