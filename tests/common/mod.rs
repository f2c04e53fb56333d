#![allow(dead_code)]

use async_trait::async_trait;
use secret_santa::domain::model::OutgoingMessage;
use secret_santa::domain::ports::Mailer;
use secret_santa::{SantaConfig, SantaError};
use std::sync::{Arc, Mutex};

/// Records every message; fails for the listed recipient names.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingMessage>>>,
    fail_for: Vec<String>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(names: &[&str]) -> Self {
        Self {
            sent: Arc::default(),
            fail_for: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutgoingMessage) -> secret_santa::Result<()> {
        if self.fail_for.contains(&message.to.name) {
            return Err(SantaError::MailError {
                recipient: message.to.name.clone(),
                message: "connection refused".to_string(),
            });
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn family_config(exclusions: &str) -> SantaConfig {
    let content = format!(
        r#"
[sender]
name = "Le Père Noël"
email = "santa@example.com"
password = "secret"

[smtp]
host = "smtp.example.com"

[participants]
Martine = "martine@example.com"
Cameron = "cameron@example.com"
Jan = "jan@example.com"
Pierre = "pierre@example.com"
Annick = "annick@example.com"
Phil = "phil@example.com"

[draw]
max_attempts = 10000
exclusions = {}
"#,
        exclusions
    );
    SantaConfig::from_toml_str(&content).unwrap()
}

pub const COUPLES: &str = r#"[["Martine", "Cameron"], ["Jan", "Pierre"], ["Annick", "Phil"]]"#;
