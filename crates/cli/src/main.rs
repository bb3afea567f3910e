mod commands;
mod logging;
mod transform;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pcokit", version, about = "Operator workflows for the Planning Center Online API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available field definitions
    ListFields,
    /// Print the recorded data for one field
    GetFieldData {
        /// Field name (built-in or custom)
        #[arg(long)]
        field: String,
    },
    /// Delete all data recorded for one custom field
    DeleteField {
        /// Field name to delete data for
        #[arg(long)]
        field: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete all people (with skips)
    DeleteAll {
        /// Person IDs to skip (repeatable)
        #[arg(long = "skip-id")]
        skip_id: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Parse authorized pickups for a specific person
    ParseAuthorizedPickups {
        /// Name of the person to process
        #[arg(long)]
        person: String,
    },
    /// Create a publishing episode under the first channel
    CreateEpisode {
        /// Episode title
        #[arg(long, default_value = "New Episode")]
        title: String,
    },
    /// Transform a legacy roster CSV into the PCO import layout
    CreateCsv {
        /// Input CSV file path
        #[arg(long)]
        input: PathBuf,
        /// Output CSV file path
        #[arg(long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match cli.command {
        Commands::ListFields => commands::list_fields::execute().await,
        Commands::GetFieldData { field } => commands::get_field_data::execute(&field).await,
        Commands::DeleteField { field, yes } => commands::delete_field::execute(&field, yes).await,
        Commands::DeleteAll { skip_id, yes } => commands::delete_all::execute(&skip_id, yes).await,
        Commands::ParseAuthorizedPickups { person } => {
            commands::parse_pickups::execute(&person).await
        }
        Commands::CreateEpisode { title } => commands::create_episode::execute(&title).await,
        Commands::CreateCsv { input, output } => commands::create_csv::execute(&input, &output),
    }
}
