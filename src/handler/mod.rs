pub mod default_handler;
pub mod ping_handler;
