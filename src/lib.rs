pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ConsoleMailer, SmtpMailer};
pub use config::{cli::LocalStorage, SantaConfig};

#[cfg(feature = "cli")]
pub use config::{DrawArgs, LookupArgs};

pub use self::core::{
    master_list::MasterList,
    matcher::{DrawOutcome, MatchOutcome, Matcher},
    santa::{LookupOutcome, RunReport, SantaEngine},
};
pub use domain::exclusions::ExclusionSet;
pub use utils::error::{Result, SantaError};
