pub mod gemini;
pub mod presenter;
pub mod provider;
pub mod schema;
pub mod site;

pub use crate::domain::model::{BusinessProfile, PageOptions};
pub use crate::domain::ports::{ContentSource, Storage};
pub use crate::utils::error::Result;
