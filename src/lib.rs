//! whatsapp-cloud-rust: WhatsApp Business Cloud API client library
//!
//! Composes template messages from typed building blocks and serializes them
//! to the exact JSON the Cloud API expects.
//!
//! ## Modules
//!
//! - `resource` - Template components, parameters, media references and the message envelope
//! - `api` - Endpoint configuration, the `Transport` seam and thin endpoint wrappers

pub mod api;
pub mod resource;

pub use api::{ApiConfiguration, ApiError, Client, Transport};
pub use resource::{
    ButtonParameter, ButtonSubKind, Component, ComponentKind, Currency, DateTimeFallback,
    InvalidFieldError, Language, MediaReference, MediaSource, Parameter, ParameterObject,
    Template, TemplateMessage,
};
