use crate::service::ping_service::PingRecord;
use tracing::{info, warn};

pub trait PingSink: Send + Sync {
    fn record_ping(&self, record: &PingRecord);
}

/// Writes every record as one `PING - {...}` info line.
pub struct LoggingSink;

impl PingSink for LoggingSink {
    fn record_ping(&self, record: &PingRecord) {
        match record.to_log_line() {
            Ok(line) => info!("PING - {}", line),
            Err(e) => warn!("Failed to serialize ping record {:?}: {}", record, e),
        }
    }
}
