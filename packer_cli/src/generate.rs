use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use packer_optimizer::json::schema::{generate_allocation_json_schema, generate_json_schema};
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Body accepted by `POST /api/v1/optimize`
    #[default]
    Request,
    /// Allocation returned for a feasible request
    Allocation,
}

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Writes a JSON schema for the optimization payloads
    JsonSchema {
        #[arg(long, value_enum, default_value_t = SchemaKind::Request)]
        kind: SchemaKind,

        /// Output file, printed to stdout when omitted
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

fn schema_for(kind: SchemaKind) -> Result<String, serde_json::Error> {
    match kind {
        SchemaKind::Request => generate_json_schema(),
        SchemaKind::Allocation => generate_allocation_json_schema(),
    }
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { kind, out } => {
            let schema = schema_for(kind)?;

            let Some(out) = out else {
                println!("{schema}");
                return Ok(());
            };

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, schema)?;
            info!("Wrote {kind:?} schema to {}", out.display());
        }
    }

    Ok(())
}
