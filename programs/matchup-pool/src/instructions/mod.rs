pub mod admin;
pub mod betting;
pub mod settlement;
pub mod views;

pub use admin::*;
pub use betting::*;
pub use settlement::*;
pub use views::*;
