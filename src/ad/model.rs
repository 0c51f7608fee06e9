//! VAST response shapes as delivered by the external client library
//!
//! XML parsing is the client's job; these are the already-parsed structures
//! the plugin consumes. Immutable once received.

/// Parsed VAST response containing ads
#[derive(Debug, Clone, Default)]
pub struct VastResponse {
    pub ads: Vec<VastAd>,
}

/// A single ad from a VAST response
#[derive(Debug, Clone)]
pub struct VastAd {
    pub id: String,
    pub creatives: Vec<Creative>,
    /// Error-tracking URL templates for this ad
    pub error_url_templates: Vec<String>,
}

/// Creative kind as reported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreativeType {
    /// Takes over the video slot (pre/mid/post-roll)
    Linear,
    /// Displayed alongside content, outside the video slot
    Companion,
    NonLinear,
}

/// A creative within an ad
#[derive(Debug, Clone)]
pub struct Creative {
    pub creative_type: CreativeType,
    pub media_files: Vec<MediaFileDescriptor>,
}

/// A candidate media file for a linear creative
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFileDescriptor {
    pub file_url: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

/// Player-consumable source, derived 1:1 from a media file that passed
/// the playability filter
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDescriptor {
    pub src: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

impl From<&MediaFileDescriptor> for SourceDescriptor {
    fn from(media_file: &MediaFileDescriptor) -> Self {
        Self {
            src: media_file.file_url.clone(),
            mime_type: media_file.mime_type.clone(),
            width: media_file.width,
            height: media_file.height,
        }
    }
}

impl Creative {
    pub fn linear(media_files: Vec<MediaFileDescriptor>) -> Self {
        Self {
            creative_type: CreativeType::Linear,
            media_files,
        }
    }

    pub fn companion() -> Self {
        Self {
            creative_type: CreativeType::Companion,
            media_files: Vec::new(),
        }
    }
}
