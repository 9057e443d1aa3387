use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "issueradar")]
#[clap(about = "Find high-value contribution opportunities across tracked repositories", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
