pub mod access_log;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod routes;
pub mod server;
pub mod service;
pub mod sink;
pub mod state;
