//! Command-line client for the incident and policy mock services
//!
//! Prints each JSON response pretty-printed on stdout. Logs go to stderr.

mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use client::{MockClient, PatchIncidentRequest};

#[derive(Parser)]
#[command(name = "mock-client", version)]
struct Cli {
    /// Base URL of the incident service
    #[arg(long, env = "MOCK_GESTOR_URL", default_value = "http://localhost:3000")]
    incidents_url: String,

    /// Base URL of the policy service
    #[arg(long, env = "MOCK_SISTEMA_URL", default_value = "http://localhost:3001")]
    policies_url: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List open incidents
    Incidents {
        /// Only incidents owned by this mailbox
        #[arg(long)]
        buzon: Option<String>,
    },
    /// List closed incidents
    Closed {
        /// Only incidents opened in the last N months
        #[arg(long)]
        meses: Option<u32>,
    },
    /// Apply a transition to an incident
    Patch {
        /// Incident id (codIncidencia)
        id: String,
        /// reasignar | resolver | en_espera | pendiente_implantar
        #[arg(long)]
        action: String,
        #[arg(long)]
        buzon_destino: Option<String>,
        #[arg(long)]
        notas_resolucion: Option<String>,
        #[arg(long)]
        detalle: Option<String>,
    },
    /// Show attachment metadata
    Attachment { filename: String },
    /// Look up a policy
    Policy { numero: String },
    /// Ask for a resolution recommendation
    Check {
        numero: String,
        #[arg(long)]
        cod_solucion: Option<String>,
        #[arg(long)]
        str_json: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = MockClient::new(&cli.incidents_url, &cli.policies_url)?;

    let response = match cli.cmd {
        Commands::Incidents { buzon } => client.list_incidents(buzon.as_deref()).await?,
        Commands::Closed { meses } => client.list_closed_incidents(meses).await?,
        Commands::Patch {
            id,
            action,
            buzon_destino,
            notas_resolucion,
            detalle,
        } => {
            let patch = PatchIncidentRequest {
                action,
                target_mailbox: buzon_destino,
                resolution_notes: notas_resolucion,
                detail: detalle,
            };
            client.patch_incident(&id, &patch).await?
        }
        Commands::Attachment { filename } => client.attachment(&filename).await?,
        Commands::Policy { numero } => client.get_policy(&numero).await?,
        Commands::Check {
            numero,
            cod_solucion,
            str_json,
        } => {
            client
                .check_policy(&numero, cod_solucion.as_deref(), str_json.as_deref())
                .await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
