use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Scan {
        #[clap(short, long)]
        category: Option<String>,
        #[clap(long)]
        continuous: bool,
        #[clap(short, long)]
        interval_hours: Option<u64>,
        #[clap(long)]
        max_passes: Option<u64>,
        #[clap(long)]
        duration_mins: Option<u64>,
    },
    List,
    Validate,
    History {
        repository: Option<String>,
    },
}
