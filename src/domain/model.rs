use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::exclusions::ExclusionSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One drawn pair: `giver` buys a gift for `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver: Participant,
    pub recipient: Participant,
}

/// Recipient -> giver mapping produced by a single matching attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    by_recipient: BTreeMap<String, Pairing>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, giver: Participant, recipient: Participant) {
        self.by_recipient
            .insert(recipient.name.clone(), Pairing { giver, recipient });
    }

    pub fn contains_recipient(&self, recipient: &str) -> bool {
        self.by_recipient.contains_key(recipient)
    }

    pub fn recipient_of(&self, giver: &str) -> Option<&Participant> {
        self.by_recipient
            .values()
            .find(|pairing| pairing.giver.name == giver)
            .map(|pairing| &pairing.recipient)
    }

    /// Pairings ordered by recipient name.
    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.by_recipient.values()
    }

    pub fn len(&self) -> usize {
        self.by_recipient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_recipient.is_empty()
    }

    /// Lists every way this assignment fails to be a complete, exclusion
    /// respecting derangement of `roster`. Empty means valid.
    pub fn violations(&self, roster: &[Participant], exclusions: &ExclusionSet) -> Vec<String> {
        let mut problems = Vec::new();
        let mut givers = HashSet::new();
        let mut recipients = HashSet::new();

        for pairing in self.pairings() {
            let giver = &pairing.giver.name;
            let recipient = &pairing.recipient.name;

            if giver == recipient {
                problems.push(format!("{} drew themselves", giver));
            }
            if exclusions.is_excluded(giver, recipient) {
                problems.push(format!("{} drew excluded recipient {}", giver, recipient));
            }
            if !givers.insert(giver.as_str()) {
                problems.push(format!("{} gives more than once", giver));
            }
            recipients.insert(recipient.as_str());
        }

        for participant in roster {
            if !givers.contains(participant.name.as_str()) {
                problems.push(format!("{} has nobody to give to", participant.name));
            }
            if !recipients.contains(participant.name.as_str()) {
                problems.push(format!("{} receives nothing", participant.name));
            }
        }

        if self.len() != roster.len() {
            problems.push(format!(
                "{} pairings for {} participants",
                self.len(),
                roster.len()
            ));
        }

        problems
    }
}

/// A plaintext e-mail ready to hand to a [`crate::domain::ports::Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub to: Participant,
    pub subject: String,
    pub body: String,
}

impl OutgoingMessage {
    pub fn render(&self) -> String {
        format!(
            "From:{}\nTo:{}\nSubject:{}\n\n{}",
            self.sender_name, self.to.email, self.subject, self.body
        )
    }
}
