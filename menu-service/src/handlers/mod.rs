pub mod health;
pub mod menu;
pub mod store_status;

pub use health::{health_check, liveness};
pub use menu::{get_menu, replace_menu};
pub use store_status::update_store_status;
