//! Template resources for the WhatsApp Cloud API.
//!
//! These types model the `components` and `parameters` of a template message
//! and serialize to the exact JSON shape the API expects.

mod button;
mod component;
mod currency;
mod date_time;
mod language;
mod media;
mod parameter;
mod template;

pub use button::*;
pub use component::*;
pub use currency::*;
pub use date_time::*;
pub use language::*;
pub use media::*;
pub use parameter::*;
pub use template::*;
