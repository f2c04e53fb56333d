// Adapters layer: concrete mailers behind the domain's `Mailer` port.

pub mod console;
pub mod smtp;

pub use console::ConsoleMailer;
pub use smtp::SmtpMailer;
