use crate::config::toml_config::SantaConfig;
use crate::core::master_list::MasterList;
use crate::core::matcher::{DrawOutcome, Matcher};
use crate::core::message::MessageComposer;
use crate::domain::model::{OutgoingMessage, Pairing};
use crate::domain::ports::{Mailer, Storage};
use crate::utils::error::{Result, SantaError};

#[derive(Debug, Clone)]
pub struct RunReport {
    pub master_list: MasterList,
    /// Matching passes needed before one completed.
    pub draw_attempts: u32,
    pub sent: usize,
    /// Givers whose notice could not be delivered.
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Resent(Pairing),
    NotFound { known_givers: Vec<String> },
}

pub struct SantaEngine<S: Storage> {
    storage: S,
    mailer: Box<dyn Mailer>,
    matcher: Matcher,
    config: SantaConfig,
    dry_run: bool,
}

impl<S: Storage> SantaEngine<S> {
    pub fn new(storage: S, mailer: Box<dyn Mailer>, config: SantaConfig) -> Self {
        Self {
            storage,
            mailer,
            matcher: Matcher::time_seeded(),
            config,
            dry_run: false,
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Prints the master list to stdout once drawn.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Draw, persist the master list, then notify every giver.
    pub async fn run(&mut self, attempt: u32) -> Result<RunReport> {
        let roster = self.config.roster();
        let exclusions = self.config.exclusions();
        let max_attempts = self.config.max_attempts();

        tracing::info!(
            "🎅 Drawing for {} participants with {} exclusions",
            roster.len(),
            exclusions.len()
        );

        let (assignment, draw_attempts) =
            match self.matcher.draw(&roster, &exclusions, max_attempts) {
                DrawOutcome::Matched {
                    assignment,
                    attempts,
                } => (assignment, attempts),
                DrawOutcome::Exhausted { attempts } => {
                    tracing::error!("❌ No valid draw after {} attempts", attempts);
                    return Err(SantaError::DrawExhausted { attempts });
                }
            };

        tracing::info!("✅ Everyone matched after {} attempt(s)", draw_attempts);

        let master_list = MasterList::new(attempt, &assignment);

        if self.dry_run {
            println!("The following is a list of \"secret santa : person they're shopping for\" :");
            println!("{}", master_list.to_plaintext());
        }

        self.persist(&master_list).await?;

        let composer = MessageComposer::new(&self.config.sender, self.config.message());
        let mut sent = 0;
        let mut failed = Vec::new();

        for pairing in &master_list.pairings {
            let message = composer.draw_notice(pairing, attempt);
            if self.deliver(&message).await {
                sent += 1;
            } else {
                failed.push(pairing.giver.name.clone());
            }
        }

        Ok(RunReport {
            master_list,
            draw_attempts,
            sent,
            failed,
        })
    }

    /// Re-send one giver's assignment from the persisted master list.
    pub async fn lookup(&self, giver_name: &str) -> Result<LookupOutcome> {
        let master_list = self.load().await?;

        let Some(pairing) = master_list.find_giver(giver_name) else {
            tracing::warn!("🔍 {} is not on the master list", giver_name);
            return Ok(LookupOutcome::NotFound {
                known_givers: master_list
                    .giver_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            });
        };

        tracing::info!("🔍 Found {} on the master list", giver_name);

        let composer = MessageComposer::new(&self.config.sender, self.config.message());
        let message = composer.reminder(pairing);
        self.mailer.send(&message).await?;
        tracing::info!("📧 E-mail sent successfully to {}", pairing.giver.name);

        Ok(LookupOutcome::Resent(pairing.clone()))
    }

    pub async fn load(&self) -> Result<MasterList> {
        let encoded = self
            .storage
            .read_file(&self.config.master_list_path())
            .await?;
        MasterList::decode(&encoded)
    }

    async fn persist(&self, master_list: &MasterList) -> Result<()> {
        let path = self.config.master_list_path();
        self.storage
            .write_file(&path, master_list.encode().as_bytes())
            .await?;
        tracing::info!("📁 Master list saved to {}", path);
        Ok(())
    }

    async fn deliver(&self, message: &OutgoingMessage) -> bool {
        tracing::info!("📧 Sending secret santa e-mail to {}", message.to.name);
        match self.mailer.send(message).await {
            Ok(()) => {
                tracing::info!("✅ E-mail sent successfully to {}", message.to.name);
                true
            }
            Err(e) => {
                tracing::error!("❌ Message failed to send to {}: {}", message.to.name, e);
                false
            }
        }
    }
}
