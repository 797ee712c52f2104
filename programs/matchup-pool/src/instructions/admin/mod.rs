pub mod init_platform;
pub mod create_market;

pub use init_platform::*;
pub use create_market::*;
