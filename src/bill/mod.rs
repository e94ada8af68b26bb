pub mod assembler;
pub mod error;
pub mod models;
pub mod tip;

pub use assembler::*;
pub use error::*;
pub use models::*;
pub use tip::*;
