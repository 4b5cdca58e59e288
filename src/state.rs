use crate::{
    config::Config,
    sink::{LoggingSink, PingSink},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sink: Arc<dyn PingSink + Send + Sync>,
}

impl AppState {
    /// State with pings going to the log.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            sink: Arc::new(LoggingSink),
        }
    }
}
