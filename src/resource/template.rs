//! Outgoing template message envelope.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};

use super::{Component, Language};

/// Approved template with the components that fill in its placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub language: Language,
    pub components: Vec<Component>,
}

impl Template {
    pub fn new(name: impl Into<String>, language: Language) -> Self {
        Self {
            name: name.into(),
            language,
            components: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".into(), self.name.as_str().into());
        map.insert("language".into(), self.language.to_json());
        if !self.components.is_empty() {
            map.insert(
                "components".into(),
                Value::Array(self.components.iter().map(Component::to_json).collect()),
            );
        }
        Value::Object(map)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Template", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("language", &self.language)?;
        if self.components.is_empty() {
            state.skip_field("components")?;
        } else {
            state.serialize_field("components", &self.components)?;
        }
        state.end()
    }
}

/// Template message addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    /// Recipient phone number or WhatsApp ID.
    pub to: String,
    pub template: Template,
}

impl TemplateMessage {
    pub const MESSAGING_PRODUCT: &'static str = "whatsapp";
    pub const RECIPIENT_TYPE: &'static str = "individual";

    pub fn new(to: impl Into<String>, template: Template) -> Self {
        Self {
            to: to.into(),
            template,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("messaging_product".into(), Self::MESSAGING_PRODUCT.into());
        map.insert("recipient_type".into(), Self::RECIPIENT_TYPE.into());
        map.insert("to".into(), self.to.as_str().into());
        map.insert("type".into(), "template".into());
        map.insert("template".into(), self.template.to_json());
        Value::Object(map)
    }
}

impl Serialize for TemplateMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TemplateMessage", 5)?;
        state.serialize_field("messaging_product", Self::MESSAGING_PRODUCT)?;
        state.serialize_field("recipient_type", Self::RECIPIENT_TYPE)?;
        state.serialize_field("to", &self.to)?;
        state.serialize_field("type", "template")?;
        state.serialize_field("template", &self.template)?;
        state.end()
    }
}
