pub mod master_list;
pub mod matcher;
pub mod message;
pub mod santa;

pub use crate::domain::ports::{Mailer, Storage};
pub use crate::utils::error::Result;
