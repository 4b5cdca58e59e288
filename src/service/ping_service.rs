use chrono::{Local, SecondsFormat};
use serde::{Serialize, ser::Error as _};
use serde_json::{Serializer, Value, ser::Formatter};
use std::io;
use tracing::warn;

/// Body of a POSTed ping, after the JSON parse attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PingPayload {
    Parsed(Value),
    /// Body that failed to parse, kept as text.
    Raw(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PingRecord {
    pub timestamp: String,
    pub ping: PingPayload,
    pub error: Option<String>,
}

impl PingRecord {
    /// Builds a record for `body` stamped with the current local time.
    pub fn from_body(body: &[u8]) -> Self {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Micros, false);
        Self::from_body_at(body, timestamp)
    }

    pub fn from_body_at(body: &[u8], timestamp: String) -> Self {
        let (ping, error) = parse_payload(body);
        PingRecord {
            timestamp,
            ping,
            error,
        }
    }

    pub fn to_log_line(&self) -> serde_json::Result<String> {
        to_spaced_json(self)
    }
}

/// Empty bodies are not an error; anything else must be valid JSON.
pub fn parse_payload(body: &[u8]) -> (PingPayload, Option<String>) {
    if body.is_empty() {
        return (PingPayload::Empty, None);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) => (PingPayload::Parsed(value), None),
        Err(e) => {
            let raw = String::from_utf8_lossy(body).into_owned();
            warn!(
                "Failed JSON load of body data: {:?}, exception: '{}'",
                raw, e
            );
            (PingPayload::Raw(raw), Some(e.to_string()))
        }
    }
}

/// Serializes `value` as single-line JSON with a space after every `:`
/// and `,`, e.g. `{"ping": {"a": 1}}`.
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
