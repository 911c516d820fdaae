use clap::Parser;

/// Run a scripted demo wallet session
#[derive(Parser, Debug)]
#[command(name = "ramp-ledger")]
#[command(about = "Demo fiat/crypto on-off ramp wallet ledger", long_about = None)]
pub struct CliArgs {
    /// Number of simulated incoming transfers to trigger
    #[arg(
        long = "incoming",
        value_name = "COUNT",
        default_value_t = 1,
        help = "Number of simulated incoming transfers to trigger"
    )]
    pub incoming: usize,

    /// Skip the simulated API latency
    #[arg(long = "fast", help = "Skip the simulated API latency")]
    pub fast: bool,

    /// Wait out the confirmation window before printing results
    #[arg(
        long = "settle",
        help = "Wait for pending incoming transfers to confirm before exiting"
    )]
    pub settle: bool,

    /// Seed for the deterministic activity sequence
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed for the deterministic activity sequence (default: 12345)"
    )]
    pub seed: Option<u64>,
}
