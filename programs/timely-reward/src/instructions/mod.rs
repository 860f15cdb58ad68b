pub mod set_paused;
pub mod set_token;
pub mod add_reward;
pub mod claim;

pub use set_paused::*;
pub use set_token::*;
pub use add_reward::*;
pub use claim::*;
