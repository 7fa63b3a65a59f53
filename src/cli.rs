use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "huntreg-json",
    version,
    about = "Convert hunting regulation spreadsheets into nested JSON records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertArgs),
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub sheet: Option<String>,

    #[arg(long)]
    pub start_row: Option<usize>,

    #[arg(long)]
    pub end_row: Option<usize>,

    #[arg(long)]
    pub column_map: Option<PathBuf>,

    #[arg(long)]
    pub summary_path: Option<PathBuf>,

    #[arg(long, default_value_t = 1000)]
    pub progress_every: usize,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub sheet: Option<String>,

    #[arg(long)]
    pub column_map: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
