pub mod cli;
pub mod toml_config;

pub use toml_config::SantaConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw secret santa pairs and e-mail every participant")]
pub struct DrawArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "secret-santa.toml")]
    pub config: String,

    /// Dry run - print the master list and messages instead of sending e-mail
    #[arg(long)]
    pub debug: bool,

    /// Redraw number; anything above 1 tells everyone to ignore the previous draw
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub attempt: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "santa-lookup")]
#[command(about = "Resend one giver's assignment from the saved master list")]
pub struct LookupArgs {
    /// Name of the giver who forgot who they are shopping for
    pub name: String,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "secret-santa.toml")]
    pub config: String,

    /// Print the message instead of sending it
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_draw_args_defaults() {
        let args = DrawArgs::parse_from(["secret-santa"]);
        assert_eq!(args.attempt, 1);
        assert!(!args.debug);
        assert_eq!(args.config, "secret-santa.toml");
    }

    #[test]
    fn test_attempt_must_be_positive() {
        assert!(DrawArgs::try_parse_from(["secret-santa", "--attempt", "0"]).is_err());
        let args = DrawArgs::parse_from(["secret-santa", "--attempt", "3", "--debug"]);
        assert_eq!(args.attempt, 3);
        assert!(args.debug);
    }

    #[test]
    fn test_lookup_requires_a_name() {
        assert!(LookupArgs::try_parse_from(["santa-lookup"]).is_err());
        let args = LookupArgs::parse_from(["santa-lookup", "Jan"]);
        assert_eq!(args.name, "Jan");
    }
}
