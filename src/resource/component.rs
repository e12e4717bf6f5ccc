//! Template components: the header, body and button sections of a template
//! message, each carrying its ordered parameters.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{ButtonParameter, ParameterObject};

/// Section of the template a component fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Header,
    Body,
    Button,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Header => "header",
            ComponentKind::Body => "body",
            ComponentKind::Button => "button",
        }
    }
}

/// Button flavour, only meaningful on button components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSubKind {
    QuickReply,
    Url,
}

impl ButtonSubKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSubKind::QuickReply => "quick_reply",
            ButtonSubKind::Url => "url",
        }
    }
}

/// Field of a [`Component`] rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentField {
    SubKind,
    Index,
}

impl ComponentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentField::SubKind => "sub_kind",
            ComponentField::Index => "index",
        }
    }
}

/// Raised when a component is built with fields its kind does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidFieldError {
    pub field: ComponentField,
    pub message: String,
}

impl InvalidFieldError {
    fn not_required(field: ComponentField) -> Self {
        Self {
            field,
            message: format!("{} is not required when type is not button", field.as_str()),
        }
    }
}

/// A single parameter slot of a component.
///
/// Header and body components carry [`ParameterObject`]s, button components
/// carry [`ButtonParameter`]s. The pairing is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    Object(ParameterObject),
    Button(ButtonParameter),
}

impl Parameter {
    pub fn to_json(&self) -> Value {
        match self {
            Parameter::Object(object) => object.to_json(),
            Parameter::Button(button) => button.to_json(),
        }
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Parameter::Object(object) => object.serialize(serializer),
            Parameter::Button(button) => button.serialize(serializer),
        }
    }
}

impl From<ParameterObject> for Parameter {
    fn from(object: ParameterObject) -> Self {
        Parameter::Object(object)
    }
}

impl From<ButtonParameter> for Parameter {
    fn from(button: ButtonParameter) -> Self {
        Parameter::Button(button)
    }
}

/// One section of a template message.
///
/// Only obtainable through [`Component::new`] (or the infallible shortcuts),
/// so an instance always satisfies the kind-dependent field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    kind: ComponentKind,
    sub_kind: Option<ButtonSubKind>,
    index: Option<u32>,
    parameters: Vec<Parameter>,
}

impl Component {
    /// Build a component, rejecting `sub_kind` or `index` on non-button kinds.
    ///
    /// Button components default to index 0. A button without `sub_kind` is
    /// accepted.
    pub fn new(
        kind: ComponentKind,
        sub_kind: Option<ButtonSubKind>,
        index: Option<u32>,
        parameters: Vec<Parameter>,
    ) -> Result<Self, InvalidFieldError> {
        let index = if kind == ComponentKind::Button {
            Some(index.unwrap_or(0))
        } else {
            if sub_kind.is_some() {
                return Err(InvalidFieldError::not_required(ComponentField::SubKind));
            }
            if index.is_some() {
                return Err(InvalidFieldError::not_required(ComponentField::Index));
            }
            None
        };

        Ok(Self {
            kind,
            sub_kind,
            index,
            parameters,
        })
    }

    pub fn header() -> Self {
        Self::section(ComponentKind::Header)
    }

    pub fn body() -> Self {
        Self::section(ComponentKind::Body)
    }

    /// Button component at `index` within the template's buttons.
    pub fn button(sub_kind: ButtonSubKind, index: u32) -> Self {
        Self {
            kind: ComponentKind::Button,
            sub_kind: Some(sub_kind),
            index: Some(index),
            parameters: Vec::new(),
        }
    }

    fn section(kind: ComponentKind) -> Self {
        Self {
            kind,
            sub_kind: None,
            index: None,
            parameters: Vec::new(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn sub_kind(&self) -> Option<ButtonSubKind> {
        self.sub_kind
    }

    /// Position of the button; always `Some` for buttons, `None` otherwise.
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Append a parameter. Order is kept and duplicates are allowed.
    pub fn add_parameter(&mut self, parameter: impl Into<Parameter>) -> &mut Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Builder-style variant of [`Component::add_parameter`].
    pub fn with_parameter(mut self, parameter: impl Into<Parameter>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    fn is_button(&self) -> bool {
        self.kind == ComponentKind::Button
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), self.kind.as_str().into());
        map.insert(
            "parameters".into(),
            Value::Array(self.parameters.iter().map(Parameter::to_json).collect()),
        );
        if self.is_button() {
            map.insert(
                "sub_type".into(),
                self.sub_kind.map_or(Value::Null, |sub_kind| sub_kind.as_str().into()),
            );
            map.insert("index".into(), self.index.unwrap_or(0).into());
        }
        Value::Object(map)
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.is_button() { 4 } else { 2 };
        let mut state = serializer.serialize_struct("Component", len)?;
        state.serialize_field("type", self.kind.as_str())?;
        state.serialize_field("parameters", &self.parameters)?;
        if self.is_button() {
            state.serialize_field("sub_type", &self.sub_kind.map(|sub_kind| sub_kind.as_str()))?;
            state.serialize_field("index", &self.index.unwrap_or(0))?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Currency, DateTimeFallback, MediaReference, MediaSource};

    const NON_BUTTON: [ComponentKind; 2] = [ComponentKind::Header, ComponentKind::Body];

    #[test]
    fn test_button_index_defaults_to_zero() {
        let button =
            Component::new(ComponentKind::Button, Some(ButtonSubKind::QuickReply), None, vec![])
                .unwrap();
        assert_eq!(button.index(), Some(0));
    }

    #[test]
    fn test_sub_kind_rejected_outside_buttons() {
        for kind in NON_BUTTON {
            let err = Component::new(kind, Some(ButtonSubKind::QuickReply), None, vec![])
                .unwrap_err();
            assert_eq!(err.field, ComponentField::SubKind);
            assert_eq!(err.message, "sub_kind is not required when type is not button");
            assert_eq!(err.to_string(), err.message);
        }
    }

    #[test]
    fn test_index_rejected_outside_buttons() {
        for kind in NON_BUTTON {
            for index in [0, 1, 7] {
                let err = Component::new(kind, None, Some(index), vec![]).unwrap_err();
                assert_eq!(err.field, ComponentField::Index);
                assert_eq!(err.message, "index is not required when type is not button");
            }
        }
    }

    #[test]
    fn test_non_button_has_no_index() {
        let header = Component::new(ComponentKind::Header, None, None, vec![]).unwrap();
        assert_eq!(header.index(), None);
        assert_eq!(header.sub_kind(), None);
        assert_eq!(header, Component::header());
    }

    #[test]
    fn test_button_without_sub_kind_is_accepted() {
        let button = Component::new(ComponentKind::Button, None, None, vec![]).unwrap();
        assert_eq!(button.sub_kind(), None);
        assert_eq!(button.index(), Some(0));
        assert_eq!(
            serde_json::to_string(&button).unwrap(),
            r#"{"type":"button","parameters":[],"sub_type":null,"index":0}"#
        );
    }

    #[test]
    fn test_add_parameters_keeps_order_and_duplicates() {
        let text = ParameterObject::text("I am a text");
        let currency = ParameterObject::from(Currency::new("USD", 1000, "1000"));
        let date_time = ParameterObject::from(DateTimeFallback::new("2020-01-01T00:00:00Z"));
        let image = ParameterObject::from(
            MediaReference::image(MediaSource::link("http(s)://URL")).with_caption("caption"),
        );
        let document = ParameterObject::from(
            MediaReference::document(MediaSource::link("http(s)://URL")).with_filename("txt.rb"),
        );
        let video = ParameterObject::from(MediaReference::video(MediaSource::id("123")));

        let mut header = Component::header();
        header
            .add_parameter(text.clone())
            .add_parameter(currency.clone())
            .add_parameter(date_time.clone())
            .add_parameter(image.clone())
            .add_parameter(document.clone())
            .add_parameter(video.clone())
            .add_parameter(date_time.clone());

        let expected: Vec<Parameter> = vec![
            text.into(),
            currency.into(),
            date_time.clone().into(),
            image.into(),
            document.into(),
            video.into(),
            date_time.into(),
        ];
        assert_eq!(header.parameters(), expected.as_slice());
    }

    #[test]
    fn test_header_component_json() {
        let image = MediaReference::image(MediaSource::link("http(s)://URL")).with_caption("caption");
        let header = Component::new(
            ComponentKind::Header,
            None,
            None,
            vec![ParameterObject::from(image).into()],
        )
        .unwrap();

        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"type":"header","parameters":[{"type":"image","image":{"link":"http(s)://URL","caption":"caption"}}]}"#
        );
    }

    #[test]
    fn test_body_component_json() {
        let body = Component::body()
            .with_parameter(ParameterObject::text("I am a text"))
            .with_parameter(ParameterObject::from(Currency::new("USD", 1000, "1000")))
            .with_parameter(ParameterObject::from(DateTimeFallback::new(
                "2020-01-01T00:00:00Z",
            )));

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            concat!(
                r#"{"type":"body","parameters":["#,
                r#"{"type":"text","text":"I am a text"},"#,
                r#"{"type":"currency","currency":{"fallback_value":"1000","code":"USD","amount_1000":1000}},"#,
                r#"{"type":"date_time","date_time":{"fallback_value":"2020-01-01T00:00:00Z"}}"#,
                r#"]}"#
            )
        );
    }

    #[test]
    fn test_button_component_json() {
        let button = Component::new(
            ComponentKind::Button,
            Some(ButtonSubKind::QuickReply),
            Some(0),
            vec![
                ButtonParameter::payload("payload").into(),
                ButtonParameter::text("text").into(),
            ],
        )
        .unwrap();

        let expected = r#"{"type":"button","parameters":[{"type":"payload","payload":"payload"},{"type":"text","text":"text"}],"sub_type":"quick_reply","index":0}"#;
        assert_eq!(serde_json::to_string(&button).unwrap(), expected);
        assert_eq!(serde_json::to_string(&button.to_json()).unwrap(), expected);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let button = Component::button(ButtonSubKind::Url, 1)
            .with_parameter(ButtonParameter::text("order/42"));
        let first = serde_json::to_string(&button).unwrap();
        let second = serde_json::to_string(&button).unwrap();
        assert_eq!(first, second);
        assert_eq!(button.to_json(), button.to_json());
        assert!(first.ends_with(r#""sub_type":"url","index":1}"#));
    }
}
