use crate::domain::model::OutgoingMessage;
use crate::domain::ports::Mailer;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Dry-run mailer: prints every message to stdout instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }

    pub fn framed(message: &OutgoingMessage) -> String {
        format!(
            "-------------------------------\n{}\n-------------------------------",
            message.render()
        )
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        tracing::debug!("Dry run, printing message for {}", message.to.name);
        println!("{}", Self::framed(message));
        Ok(())
    }
}
