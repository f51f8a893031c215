//! Command infrastructure for handlers.
//!
//! `CommandMetadata` carries the reference time and request context through
//! a handler into the events it publishes. The rules never read the wall
//! clock; whoever builds the metadata decides what "now" is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// Metadata context for command handlers.
///
/// # Example
///
/// ```ignore
/// let metadata = CommandMetadata::new(Timestamp::now())
///     .with_actor("maria-silva")
///     .with_source("plano-acao");
///
/// handler.handle(cmd, metadata).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Reference time for status derivation and event timestamps.
    pub now: Timestamp,

    /// Who triggered the command, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    actor: Option<String>,

    /// Links the events of a single host action.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Where the command came from (e.g., "form", "refresh").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata for a command evaluated at `now`.
    pub fn new(now: Timestamp) -> Self {
        Self {
            now,
            actor: None,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add the acting user.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Builder: Add correlation ID.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    ///
    /// Call once per command and reuse the value for all its events.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Metadata at a fixed instant, with a known correlation id.
    pub fn test_fixture(now: Timestamp) -> Self {
        Self::new(now)
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> Timestamp {
        Timestamp::start_of_day(NaiveDate::from_ymd_opt(2024, 11, 1).unwrap())
    }

    #[test]
    fn new_carries_only_time() {
        let metadata = CommandMetadata::new(at());
        assert_eq!(metadata.now, at());
        assert!(metadata.actor().is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let metadata = CommandMetadata::new(at())
            .with_actor("ana-costa")
            .with_correlation_id("corr-1")
            .with_source("form");

        assert_eq!(metadata.actor(), Some("ana-costa"));
        assert_eq!(metadata.correlation_id(), "corr-1");
        assert_eq!(metadata.source(), Some("form"));
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(at());
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(CommandMetadata::new(at())).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("now"));
    }
}
