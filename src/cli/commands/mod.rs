pub mod calc;
pub mod clock;
pub mod config;
pub mod init;
pub mod locate;
pub mod start;
