use clap::Parser;
use secret_santa::domain::ports::Mailer;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{
    ConsoleMailer, LocalStorage, LookupArgs, LookupOutcome, SantaConfig, SantaEngine, SmtpMailer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = LookupArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🔍 Looking up {} on the master list", args.name);

    let config = match SantaConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mailer: Box<dyn Mailer> = if args.debug {
        Box::new(ConsoleMailer::new())
    } else {
        match SmtpMailer::from_config(&config) {
            Ok(mailer) => Box::new(mailer),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code().max(1));
            }
        }
    };

    let storage = LocalStorage::new(config.storage_directory());
    let engine = SantaEngine::new(storage, mailer, config);

    match engine.lookup(&args.name).await {
        Ok(LookupOutcome::Resent(pairing)) => {
            println!("✅ Reminder sent to {}", pairing.giver.name);
        }
        Ok(LookupOutcome::NotFound { known_givers }) => {
            println!(
                "Sorry, but the master list does not contain {} as a secret santa! Check the spelling and capitalisation.",
                args.name
            );
            println!("Here is a list of all the names on the master list:");
            for name in known_givers {
                println!("{}", name);
            }
        }
        Err(e) => {
            tracing::error!("❌ Lookup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
