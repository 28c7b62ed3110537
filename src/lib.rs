pub mod banner;
pub mod bridge;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod invoker;
pub mod logger;
pub mod server;
pub mod terminal;
