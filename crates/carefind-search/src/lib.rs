pub mod engine;
pub mod matcher;

pub use engine::{search, SearchError};
pub use matcher::{classify, preferred_service_text};
