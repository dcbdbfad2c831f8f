//! CLI command implementations

pub mod init;
pub mod policy;
pub mod replay;
