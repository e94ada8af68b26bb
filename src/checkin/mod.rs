pub mod error;
pub mod models;
pub mod status_machine;
pub mod store;

pub use error::*;
pub use models::*;
pub use status_machine::*;
pub use store::*;
