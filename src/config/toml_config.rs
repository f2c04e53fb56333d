use crate::core::matcher::DEFAULT_MAX_ATTEMPTS;
use crate::domain::exclusions::ExclusionSet;
use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_MASTER_LIST: &str = "secret-santa-master-list.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SantaConfig {
    pub sender: SenderConfig,
    pub smtp: SmtpConfig,
    pub participants: BTreeMap<String, String>,
    pub draw: Option<DrawConfig>,
    pub message: Option<MessageConfig>,
    pub storage: Option<StorageConfig>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for SenderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderConfig")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    pub max_attempts: Option<u32>,
    pub exclusions: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_retry_label")]
    pub retry_label: String,
    #[serde(default = "default_spending_limit")]
    pub spending_limit: String,
    #[serde(default = "default_sign_off")]
    pub sign_off: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            retry_label: default_retry_label(),
            spending_limit: default_spending_limit(),
            sign_off: default_sign_off(),
        }
    }
}

fn default_subject() -> String {
    "Le Père Noël secret!".to_string()
}

fn default_retry_label() -> String {
    "Tentative".to_string()
}

fn default_spending_limit() -> String {
    "30$".to_string()
}

fn default_sign_off() -> String {
    "Joyeux Noël!\nLe Père Noël".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub directory: Option<String>,
    pub master_list: Option<String>,
}

impl SantaConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SantaError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("sender.name", &self.sender.name)?;
        validation::validate_email("sender.email", &self.sender.email)?;
        validation::validate_non_empty_string("smtp.host", &self.smtp.host)?;
        validation::validate_positive_number("draw.max_attempts", self.max_attempts(), 1)?;
        validation::validate_path("storage.master_list", &self.master_list_path())?;

        if self.participants.len() < 2 {
            return Err(SantaError::InvalidConfigValueError {
                field: "participants".to_string(),
                value: self.participants.len().to_string(),
                reason: "A draw needs at least 2 participants".to_string(),
            });
        }

        for (name, email) in &self.participants {
            let field = format!("participants.{}", name);
            validation::validate_non_empty_string(&field, name)?;
            validation::validate_master_list_field(&field, name)?;
            validation::validate_email(&field, email)?;
            validation::validate_master_list_field(&field, email)?;
        }

        let exclusions = self.exclusions();
        if let Some(unknown) = exclusions
            .names()
            .find(|name| !self.participants.contains_key(*name))
        {
            return Err(SantaError::InvalidConfigValueError {
                field: "draw.exclusions".to_string(),
                value: unknown.to_string(),
                reason: "Not a participant".to_string(),
            });
        }

        Ok(())
    }

    /// Participants in name order.
    pub fn roster(&self) -> Vec<Participant> {
        self.participants
            .iter()
            .map(|(name, email)| Participant::new(name.clone(), email.clone()))
            .collect()
    }

    pub fn exclusions(&self) -> ExclusionSet {
        self.draw
            .as_ref()
            .and_then(|draw| draw.exclusions.clone())
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    pub fn max_attempts(&self) -> u32 {
        self.draw
            .as_ref()
            .and_then(|draw| draw.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    pub fn smtp_port(&self) -> u16 {
        self.smtp.port.unwrap_or(587)
    }

    pub fn message(&self) -> MessageConfig {
        self.message.clone().unwrap_or_default()
    }

    pub fn storage_directory(&self) -> String {
        self.storage
            .as_ref()
            .and_then(|storage| storage.directory.clone())
            .unwrap_or_else(|| ".".to_string())
    }

    pub fn master_list_path(&self) -> String {
        self.storage
            .as_ref()
            .and_then(|storage| storage.master_list.clone())
            .unwrap_or_else(|| DEFAULT_MASTER_LIST.to_string())
    }
}

impl Validate for SantaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[sender]
name = "Le Père Noël"
email = "santa@example.com"
password = "hunter2"

[smtp]
host = "smtp.example.com"

[participants]
Martine = "martine@example.com"
Cameron = "cameron@example.com"
Jan = "jan@example.com"

[draw]
exclusions = [["Martine", "Cameron"]]
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = SantaConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.sender.name, "Le Père Noël");
        assert_eq!(config.smtp_port(), 587);
        assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.master_list_path(), DEFAULT_MASTER_LIST);
        assert_eq!(config.storage_directory(), ".");
        assert_eq!(
            config.roster().iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["Cameron", "Jan", "Martine"]
        );
        assert!(config.exclusions().is_excluded("Cameron", "Martine"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_message_defaults_fill_missing_fields() {
        let content = format!("{}\n[message]\nspending_limit = \"50$\"\n", BASIC);
        let config = SantaConfig::from_toml_str(&content).unwrap();
        let message = config.message();

        assert_eq!(message.spending_limit, "50$");
        assert_eq!(message.subject, "Le Père Noël secret!");
        assert_eq!(message.retry_label, "Tentative");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SANTA_TEST_PASSWORD", "from-env");

        let content = BASIC.replace("hunter2", "${SANTA_TEST_PASSWORD}");
        let config = SantaConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.sender.password, "from-env");

        std::env::remove_var("SANTA_TEST_PASSWORD");
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let config = SantaConfig::from_toml_str(BASIC).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_unknown_exclusion_is_rejected() {
        let content = BASIC.replace(r#"["Martine", "Cameron"]"#, r#"["Martine", "Ghost"]"#);
        let config = SantaConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delimiters_in_names_are_rejected() {
        let content = BASIC.replace(r#"Jan = "jan@example.com""#, r#""Jan, Jr" = "jan@example.com""#);
        let config = SantaConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fewer_than_two_participants_is_rejected() {
        let content = BASIC
            .replace("Martine = \"martine@example.com\"\n", "")
            .replace("Cameron = \"cameron@example.com\"\n", "")
            .replace(r#"exclusions = [["Martine", "Cameron"]]"#, "");
        let config = SantaConfig::from_toml_str(&content).unwrap();

        assert_eq!(config.participants.len(), 1);
        assert!(matches!(
            config.validate(),
            Err(SantaError::InvalidConfigValueError { field, .. }) if field == "participants"
        ));
    }

    #[test]
    fn test_whitespace_in_email_is_rejected() {
        let content = BASIC.replace(r#"Jan = "jan@example.com""#, r#"Jan = "jan@x :""#);
        let config = SantaConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_smtp_host_is_rejected() {
        let content = BASIC.replace("smtp.example.com", "");
        let config = SantaConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = SantaConfig::from_toml_str("[sender\nname = ");
        assert!(matches!(
            result,
            Err(SantaError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = SantaConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.participants.len(), 3);
    }
}
