pub mod countdown;
pub mod error;
pub mod player;
pub mod stages;
pub mod worker;

pub use countdown::*;
pub use error::*;
pub use player::*;
pub use stages::*;
pub use worker::*;
