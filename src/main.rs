use clap::Parser;
use secret_santa::domain::ports::Mailer;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{ConsoleMailer, DrawArgs, LocalStorage, SantaConfig, SantaEngine, SmtpMailer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = DrawArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting secret-santa draw (attempt #{})", args.attempt);
    tracing::info!("📁 Loading configuration from: {}", args.config);

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
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    let mailer: Box<dyn Mailer> = if args.debug {
        tracing::info!("🔍 DEBUG MODE - messages are printed, nothing is sent");
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
    let saved_to = storage.full_path(&config.master_list_path());
    let mut engine = SantaEngine::new(storage, mailer, config).with_dry_run(args.debug);

    match engine.run(args.attempt).await {
        Ok(report) => {
            println!(
                "✅ Drew {} pairs after {} attempt(s)",
                report.master_list.pairings.len(),
                report.draw_attempts
            );
            println!("📁 Master list saved to: {}", saved_to);
            println!("📧 {} e-mail(s) delivered", report.sent);

            if !report.failed.is_empty() {
                eprintln!("⚠️  Could not e-mail: {}", report.failed.join(", "));
                eprintln!("💡 Use santa-lookup <NAME> to resend once the problem is fixed");
            }
        }
        Err(e) => {
            tracing::error!("❌ Draw failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

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
