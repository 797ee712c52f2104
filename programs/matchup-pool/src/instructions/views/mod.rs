pub mod get_odds;
pub mod get_state;
pub mod get_claimable;

pub use get_odds::*;
pub use get_state::*;
pub use get_claimable::*;
