pub mod place_stake;
pub mod claim;

pub use place_stake::*;
pub use claim::*;
