use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Date/time parameter. The API only honours the fallback text, so the value
/// is kept as a free-form display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFallback {
    pub fallback_value: String,
}

impl DateTimeFallback {
    pub fn new(fallback_value: impl Into<String>) -> Self {
        Self {
            fallback_value: fallback_value.into(),
        }
    }

    /// Use an RFC 3339 rendering of `instant` as the fallback text.
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self::new(instant.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "fallback_value": self.fallback_value })
    }
}

impl Serialize for DateTimeFallback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DateTimeFallback", 1)?;
        state.serialize_field("fallback_value", &self.fallback_value)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fallback_is_not_parsed() {
        let date_time = DateTimeFallback::new("next tuesday");
        assert_eq!(
            serde_json::to_string(&date_time).unwrap(),
            r#"{"fallback_value":"next tuesday"}"#
        );
    }

    #[test]
    fn test_from_datetime() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let date_time = DateTimeFallback::from_datetime(instant);
        assert_eq!(date_time.fallback_value, "2020-01-01T00:00:00Z");
    }
}
