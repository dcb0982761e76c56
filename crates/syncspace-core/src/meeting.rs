//! Meeting records as supplied by the upstream call source.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use crate::format::meeting_path;
use crate::time::StartTime;

/// A scheduled call, as delivered by the video backend.
///
/// Records are plain input data. The timeline functions never modify them,
/// they only derive new ordered views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    /// Opaque call identifier.
    pub id: String,
    /// Raw start timestamp. May be absent or unparseable.
    #[serde(default, alias = "starts_at")]
    pub starts_at: Option<String>,
    /// Free-form description shown as the meeting title.
    #[serde(default)]
    pub description: Option<String>,
}

impl MeetingRecord {
    /// Creates a record with no start time and no description.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            starts_at: None,
            description: None,
        }
    }

    /// Builder method to set the raw start timestamp.
    pub fn with_starts_at(mut self, starts_at: impl Into<String>) -> Self {
        self.starts_at = Some(starts_at.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parses the start, reading offset-less values as local time.
    pub fn start_time(&self) -> StartTime {
        StartTime::parse(self.starts_at.as_deref())
    }

    /// Parses the start, reading offset-less values in `tz`.
    pub fn start_time_in<Tz: TimeZone>(&self, tz: &Tz) -> StartTime {
        StartTime::parse_in(self.starts_at.as_deref(), tz)
    }

    /// Routing path for joining this meeting.
    pub fn path(&self) -> String {
        meeting_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn builder() {
        let record = MeetingRecord::new("call-1")
            .with_starts_at("2026-10-14T15:00:00Z")
            .with_description("Design review");
        assert_eq!(record.id, "call-1");
        assert_eq!(record.starts_at.as_deref(), Some("2026-10-14T15:00:00Z"));
        assert_eq!(record.description.as_deref(), Some("Design review"));
        assert!(record.start_time_in(&Utc).is_valid());
        assert_eq!(record.path(), "/meeting/call-1");
    }

    #[test]
    fn deserialize_camel_case_with_missing_fields() {
        let records: Vec<MeetingRecord> = serde_json::from_str(
            r#"[
                {"id": "a", "startsAt": "2026-10-14T15:00:00Z", "description": "Standup"},
                {"id": "b", "startsAt": null},
                {"id": "c"},
                {"id": "d", "starts_at": "garbage"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 4);
        assert!(records[0].start_time_in(&Utc).is_valid());
        assert_eq!(records[1].start_time_in(&Utc), StartTime::Unscheduled);
        assert_eq!(records[2].start_time_in(&Utc), StartTime::Unscheduled);
        assert_eq!(
            records[3].start_time_in(&Utc),
            StartTime::Invalid("garbage".to_string())
        );
    }

    #[test]
    fn serialize_uses_camel_case() {
        let record = MeetingRecord::new("a").with_starts_at("2026-10-14T15:00:00Z");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"a","startsAt":"2026-10-14T15:00:00Z","description":null}"#
        );
    }
}
