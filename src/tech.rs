use crate::ad::model::SourceDescriptor;
use std::collections::HashMap;

/// Playback technology capability
///
/// Mirrors the probe surface of a host player tech: whether the current
/// environment supports it at all, and whether it can play a concrete
/// source.
pub trait PlaybackTech {
    fn is_supported(&self) -> bool;
    fn can_play_source(&self, source: &SourceDescriptor) -> bool;
}

/// Registry of playback technologies keyed by the names used in the
/// host's tech order
///
/// Names with no registered tech are skipped during source selection.
#[derive(Default)]
pub struct TechRegistry {
    techs: HashMap<String, Box<dyn PlaybackTech>>,
}

impl TechRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tech under a name; replaces any previous registration
    pub fn register(&mut self, name: impl Into<String>, tech: Box<dyn PlaybackTech>) {
        self.techs.insert(name.into(), tech);
    }

    pub fn get(&self, name: &str) -> Option<&dyn PlaybackTech> {
        self.techs.get(name).map(|tech| tech.as_ref())
    }
}

impl std::fmt::Debug for TechRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechRegistry")
            .field("techs", &self.techs.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Tech that plays a fixed set of mime types
///
/// Covers the common case of environment-probed techs and doubles as a
/// test fixture.
#[derive(Debug, Clone)]
pub struct MimeTech {
    supported: bool,
    mime_types: Vec<String>,
}

impl MimeTech {
    pub fn new(supported: bool, mime_types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            supported,
            mime_types: mime_types.into_iter().map(Into::into).collect(),
        }
    }
}

impl PlaybackTech for MimeTech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn can_play_source(&self, source: &SourceDescriptor) -> bool {
        self.mime_types.iter().any(|m| m == &source.mime_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::model::MediaFileDescriptor;

    fn mp4_source() -> SourceDescriptor {
        SourceDescriptor::from(&MediaFileDescriptor {
            file_url: "http://cdn.test/ad.mp4".into(),
            mime_type: "video/mp4".into(),
            width: 640,
            height: 360,
        })
    }

    #[test]
    fn lookup_by_registered_name() {
        let mut registry = TechRegistry::new();
        registry.register("html5", Box::new(MimeTech::new(true, ["video/mp4"])));

        assert!(registry.get("html5").is_some());
        assert!(registry.get("flash").is_none());
    }

    #[test]
    fn mime_tech_probes_by_mime_type() {
        let tech = MimeTech::new(true, ["video/mp4", "video/webm"]);
        assert!(tech.is_supported());
        assert!(tech.can_play_source(&mp4_source()));

        let webm_only = MimeTech::new(true, ["video/webm"]);
        assert!(!webm_only.can_play_source(&mp4_source()));
    }
}
