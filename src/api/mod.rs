//! Thin pass-through collaborators around the Cloud API.
//!
//! The HTTP layer itself is supplied by the caller through [`Transport`].

mod client;
mod config;
mod medias;
mod messages;
mod responses;
mod transport;

pub use client::Client;
pub use config::{ApiConfiguration, ConfigError, API_URL, DEFAULT_API_VERSION};
pub use medias::{MediaType, Medias};
pub use messages::Messages;
pub use responses::{ContactResponse, MediaInfo, MessageIdResponse, MessageResponse};
pub use transport::{ApiError, ApiRequest, HttpMethod, Transport};
