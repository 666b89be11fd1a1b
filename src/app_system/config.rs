use clap::Parser;

/// Game Vault storefront console
#[derive(Debug, Clone, Parser)]
#[command(name = "game_vault", about = "Interactive game storefront console", long_about = None)]
pub struct VaultConfig {
    /// Start with empty stores instead of the demo users, games and transaction
    #[arg(long)]
    pub no_seed: bool,

    /// Request queue capacity of each entity store
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(1..))]
    pub channel_capacity: u16,

    /// Log filter used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            no_seed: false,
            channel_capacity: 32,
            log_level: "warn".to_string(),
        }
    }
}
