pub mod credential;
pub mod digest;
pub mod error;
pub mod input;
pub mod json;
pub mod store;

pub use credential::load_api_key;
pub use digest::save_digest;
pub use error::{PersistError, Result};
pub use input::load_messages;
pub use store::SummaryStore;
