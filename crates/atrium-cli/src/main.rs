use anyhow::Context as _;
use atrium_build::{DashboardGenerator, GeneratorConfig, TABLE_ATTRIBUTE_LIMIT};
use atrium_schema::node::Schema;
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(name = "atrium", version, about = "Atrium admin generator CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate dashboard and controller artifacts for a model.
    Generate {
        /// Model name as declared in the schema (snake_case).
        model: String,

        /// Path to the schema metadata JSON file.
        #[arg(long, default_value = "schema.json")]
        schema: PathBuf,

        /// Output root directory for generated artifacts.
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Maximum number of attributes in the generated table listing.
        #[arg(long, default_value_t = TABLE_ATTRIBUTE_LIMIT)]
        limit: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Command::Generate {
            model,
            schema,
            out,
            limit,
        } => {
            let text = fs::read_to_string(&schema)
                .with_context(|| format!("reading schema file {}", schema.display()))?;
            let registry: Schema =
                serde_json::from_str(&text).context("parsing schema metadata")?;
            registry.validate()?;

            let config = GeneratorConfig {
                table_attribute_limit: limit,
                ..GeneratorConfig::default()
            };
            let resource =
                DashboardGenerator::with_config(&registry, config).generate_into(&model, &out)?;

            println!("wrote {}", out.join(resource.dashboard.path).display());
            println!("wrote {}", out.join(resource.controller.path).display());

            Ok(())
        }
    }
}
