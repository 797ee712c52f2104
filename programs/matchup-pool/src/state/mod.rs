pub mod platform;
pub mod market;
pub mod stake;

pub use platform::*;
pub use market::*;
pub use stake::*;
