use crate::domain::model::{Assignment, Pairing, Participant};
use crate::utils::error::Result;
use base64::Engine;

const ATTEMPT_PREFIX: &str = "Attempt #";
const PAIR_SEPARATOR: &str = " : ";
const FIELD_SEPARATOR: char = ',';

/// The persisted record of a draw: every (giver, recipient) pair plus the
/// `--attempt` number it was drawn under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterList {
    pub attempt: u32,
    pub pairings: Vec<Pairing>,
}

impl MasterList {
    pub fn new(attempt: u32, assignment: &Assignment) -> Self {
        let mut pairings: Vec<Pairing> = assignment.pairings().cloned().collect();
        pairings.sort_by(|a, b| a.giver.name.cmp(&b.giver.name));
        Self { attempt, pairings }
    }

    /// Text as written before encoding, also what `--debug` prints.
    pub fn to_plaintext(&self) -> String {
        let mut text = format!("{}{}\n", ATTEMPT_PREFIX, self.attempt);
        for pairing in &self.pairings {
            text.push_str(&format!(
                "{},{}{}{},{}\n",
                pairing.giver.name,
                pairing.giver.email,
                PAIR_SEPARATOR,
                pairing.recipient.name,
                pairing.recipient.email
            ));
        }
        text
    }

    /// Only the first line may be the attempt header. Lines that do not
    /// split into two `name,email` halves are skipped.
    pub fn parse_plaintext(text: &str) -> Self {
        let mut attempt = 1;
        let mut pairings = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if index == 0 {
                if let Some(number) = line.strip_prefix(ATTEMPT_PREFIX) {
                    if let Ok(number) = number.trim().parse() {
                        attempt = number;
                        continue;
                    }
                }
            }

            let Some((giver, recipient)) = line.split_once(PAIR_SEPARATOR) else {
                continue;
            };
            let (Some(giver), Some(recipient)) = (parse_participant(giver), parse_participant(recipient))
            else {
                tracing::debug!("Skipping malformed master list line: {:?}", line);
                continue;
            };

            pairings.push(Pairing { giver, recipient });
        }

        Self { attempt, pairings }
    }

    pub fn encode(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.to_plaintext())
    }

    pub fn decode(encoded: &[u8]) -> Result<Self> {
        let trimmed = encoded.trim_ascii();
        let bytes = base64::engine::general_purpose::STANDARD.decode(trimmed)?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::parse_plaintext(&text))
    }

    pub fn find_giver(&self, name: &str) -> Option<&Pairing> {
        self.pairings.iter().find(|pairing| pairing.giver.name == name)
    }

    pub fn giver_names(&self) -> Vec<&str> {
        self.pairings
            .iter()
            .map(|pairing| pairing.giver.name.as_str())
            .collect()
    }
}

fn parse_participant(field: &str) -> Option<Participant> {
    let mut parts = field.split(FIELD_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(email), None) => Some(Participant::new(name, email)),
        _ => None,
    }
}
