use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Currency, DateTimeFallback, MediaKind, MediaReference};

/// Discriminant of a [`ParameterObject`], doubling as its wire `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Text,
    Currency,
    DateTime,
    Image,
    Document,
    Video,
}

impl ParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Text => "text",
            ParameterKind::Currency => "currency",
            ParameterKind::DateTime => "date_time",
            ParameterKind::Image => "image",
            ParameterKind::Document => "document",
            ParameterKind::Video => "video",
        }
    }
}

impl From<MediaKind> for ParameterKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => ParameterKind::Image,
            MediaKind::Document => ParameterKind::Document,
            MediaKind::Video => ParameterKind::Video,
        }
    }
}

/// A typed value substituted into a header or body placeholder.
///
/// Media parameters take their variant (image, document or video) from the
/// wrapped [`MediaReference`], so the tag and payload cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterObject {
    Text(String),
    Currency(Currency),
    DateTime(DateTimeFallback),
    Media(MediaReference),
}

impl ParameterObject {
    pub fn text(text: impl Into<String>) -> Self {
        ParameterObject::Text(text.into())
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterObject::Text(_) => ParameterKind::Text,
            ParameterObject::Currency(_) => ParameterKind::Currency,
            ParameterObject::DateTime(_) => ParameterKind::DateTime,
            ParameterObject::Media(media) => media.kind.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        let kind = self.kind().as_str();
        let payload = match self {
            ParameterObject::Text(text) => Value::from(text.as_str()),
            ParameterObject::Currency(currency) => currency.to_json(),
            ParameterObject::DateTime(date_time) => date_time.to_json(),
            ParameterObject::Media(media) => media.to_json(),
        };
        let mut map = Map::new();
        map.insert("type".into(), kind.into());
        map.insert(kind.into(), payload);
        Value::Object(map)
    }
}

impl Serialize for ParameterObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind().as_str();
        let mut state = serializer.serialize_struct("ParameterObject", 2)?;
        state.serialize_field("type", kind)?;
        match self {
            ParameterObject::Text(text) => state.serialize_field(kind, text)?,
            ParameterObject::Currency(currency) => state.serialize_field(kind, currency)?,
            ParameterObject::DateTime(date_time) => state.serialize_field(kind, date_time)?,
            ParameterObject::Media(media) => state.serialize_field(kind, media)?,
        }
        state.end()
    }
}

impl From<Currency> for ParameterObject {
    fn from(currency: Currency) -> Self {
        ParameterObject::Currency(currency)
    }
}

impl From<DateTimeFallback> for ParameterObject {
    fn from(date_time: DateTimeFallback) -> Self {
        ParameterObject::DateTime(date_time)
    }
}

impl From<MediaReference> for ParameterObject {
    fn from(media: MediaReference) -> Self {
        ParameterObject::Media(media)
    }
}
