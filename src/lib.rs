pub mod cli;
pub mod data;
pub mod resolve;
pub mod server;
