pub mod credentials;
pub mod store;

pub use credentials::StoreCredentials;
pub use store::{MenuStore, MongoMenuStore};
