pub mod config;
pub mod rewards;

pub use config::*;
pub use rewards::*;
