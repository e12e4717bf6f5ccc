use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Kind of media a template parameter can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Document,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Document => "document",
            MediaKind::Video => "video",
        }
    }
}

/// Where the media lives: an uploaded media handle or a public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Id(String),
    Link(String),
}

impl MediaSource {
    pub fn id(id: impl Into<String>) -> Self {
        MediaSource::Id(id.into())
    }

    pub fn link(link: impl Into<String>) -> Self {
        MediaSource::Link(link.into())
    }
}

/// Image, document or video referenced by a template parameter.
///
/// `caption` is honoured by the API for images and documents and `filename`
/// for documents only; both are emitted exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    pub kind: MediaKind,
    pub source: MediaSource,
    pub caption: Option<String>,
    pub filename: Option<String>,
}

impl MediaReference {
    pub fn new(kind: MediaKind, source: MediaSource) -> Self {
        Self {
            kind,
            source,
            caption: None,
            filename: None,
        }
    }

    pub fn image(source: MediaSource) -> Self {
        Self::new(MediaKind::Image, source)
    }

    pub fn document(source: MediaSource) -> Self {
        Self::new(MediaKind::Document, source)
    }

    pub fn video(source: MediaSource) -> Self {
        Self::new(MediaKind::Video, source)
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::with_capacity(3);
        match &self.source {
            MediaSource::Id(id) => entries.push(("id", id.as_str())),
            MediaSource::Link(link) => entries.push(("link", link.as_str())),
        }
        if let Some(caption) = &self.caption {
            entries.push(("caption", caption.as_str()));
        }
        if let Some(filename) = &self.filename {
            entries.push(("filename", filename.as_str()));
        }
        entries
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::from(value)))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for MediaReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
