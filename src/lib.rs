pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod logging;
pub mod storage;
pub mod surfaces;
pub mod vault;
