use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

/// Discriminant of a [`ButtonParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonParameterKind {
    Payload,
    Text,
}

impl ButtonParameterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonParameterKind::Payload => "payload",
            ButtonParameterKind::Text => "text",
        }
    }
}

/// Parameter attached to a button component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonParameter {
    /// Developer-defined payload returned when a quick reply is tapped.
    Payload(String),
    /// Suffix appended to a dynamic URL button.
    Text(String),
}

impl ButtonParameter {
    pub fn payload(payload: impl Into<String>) -> Self {
        ButtonParameter::Payload(payload.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        ButtonParameter::Text(text.into())
    }

    pub fn kind(&self) -> ButtonParameterKind {
        match self {
            ButtonParameter::Payload(_) => ButtonParameterKind::Payload,
            ButtonParameter::Text(_) => ButtonParameterKind::Text,
        }
    }

    fn value(&self) -> &str {
        match self {
            ButtonParameter::Payload(value) | ButtonParameter::Text(value) => value,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let kind = self.kind().as_str();
        let mut map = serde_json::Map::new();
        map.insert("type".into(), kind.into());
        map.insert(kind.into(), self.value().into());
        serde_json::Value::Object(map)
    }
}

impl Serialize for ButtonParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind().as_str();
        let mut state = serializer.serialize_struct("ButtonParameter", 2)?;
        state.serialize_field("type", kind)?;
        state.serialize_field(kind, self.value())?;
        state.end()
    }
}
