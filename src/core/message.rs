use crate::config::toml_config::{MessageConfig, SenderConfig};
use crate::domain::model::{OutgoingMessage, Pairing};

pub struct MessageComposer {
    sender_name: String,
    sender_email: String,
    template: MessageConfig,
}

impl MessageComposer {
    pub fn new(sender: &SenderConfig, template: MessageConfig) -> Self {
        Self {
            sender_name: sender.name.clone(),
            sender_email: sender.email.clone(),
            template,
        }
    }

    /// Notice for a fresh draw. Redraws (`attempt > 1`) carry the attempt
    /// number in the subject and an apology in the body.
    pub fn draw_notice(&self, pairing: &Pairing, attempt: u32) -> OutgoingMessage {
        let mut subject = self.template.subject.clone();
        if attempt > 1 {
            subject.push_str(&format!(" {} #{}", self.template.retry_label, attempt));
        }

        self.compose(pairing, subject, attempt)
    }

    /// Resend for a giver who lost their notice.
    pub fn reminder(&self, pairing: &Pairing) -> OutgoingMessage {
        self.compose(pairing, self.template.subject.clone(), 1)
    }

    fn compose(&self, pairing: &Pairing, subject: String, attempt: u32) -> OutgoingMessage {
        let mut body = format!("Hi {}!\n\n\n", pairing.giver.name);

        if attempt > 1 {
            body.push_str(&format!(
                "Please ignore the last selection -- it turns out that someone picked someone they weren't supposed to! Time for attempt #{} :P\n\n\n",
                attempt
            ));
        }

        body.push_str(&format!(
            "This Christmas you will be {}'s Secret Santa! :)\n\n\
             The spending limit this year is {} before tax. Have fun shopping!\n\n\n\
             {}",
            pairing.recipient.name, self.template.spending_limit, self.template.sign_off
        ));

        OutgoingMessage {
            sender_name: self.sender_name.clone(),
            sender_email: self.sender_email.clone(),
            to: pairing.giver.clone(),
            subject,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Participant;

    fn composer() -> MessageComposer {
        let sender = SenderConfig {
            name: "Le Père Noël".to_string(),
            email: "santa@example.com".to_string(),
            password: String::new(),
        };
        MessageComposer::new(&sender, MessageConfig::default())
    }

    fn pairing() -> Pairing {
        Pairing {
            giver: Participant::new("Annick", "annick@example.com"),
            recipient: Participant::new("Pierre", "pierre@example.com"),
        }
    }

    #[test]
    fn test_first_attempt_notice() {
        let message = composer().draw_notice(&pairing(), 1);

        assert_eq!(message.to.email, "annick@example.com");
        assert_eq!(message.subject, "Le Père Noël secret!");
        assert_eq!(
            message.body,
            "Hi Annick!\n\n\n\
             This Christmas you will be Pierre's Secret Santa! :)\n\n\
             The spending limit this year is 30$ before tax. Have fun shopping!\n\n\n\
             Joyeux Noël!\nLe Père Noël"
        );
    }

    #[test]
    fn test_redraw_notice_mentions_attempt() {
        let message = composer().draw_notice(&pairing(), 3);

        assert_eq!(message.subject, "Le Père Noël secret! Tentative #3");
        assert!(message.body.contains("Please ignore the last selection"));
        assert!(message.body.contains("Time for attempt #3 :P"));
    }

    #[test]
    fn test_reminder_uses_plain_wording() {
        let message = composer().reminder(&pairing());

        assert_eq!(message.subject, "Le Père Noël secret!");
        assert!(!message.body.contains("Please ignore"));
        assert!(message.body.contains("Pierre's Secret Santa"));
    }
}
