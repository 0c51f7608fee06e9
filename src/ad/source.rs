use crate::ad::model::{MediaFileDescriptor, SourceDescriptor};
use crate::tech::TechRegistry;
use std::collections::HashMap;
use tracing::debug;

/// Select player-playable sources from candidate media files
///
/// For each name in `tech_order` (host preference order), resolve the tech
/// from the registry; names with no registered tech are skipped. A
/// supported tech contributes every media file it can play, converted to a
/// [`SourceDescriptor`], bucketed under that tech. Buckets are then
/// concatenated in `tech_order` sequence; within a bucket the original
/// media-file order is preserved.
///
/// Duplicates are kept: a file playable by two techs appears once per
/// tech, and multiple resolutions of one creative all survive. Pure
/// function, no side effects beyond a debug log.
///
/// Returns an empty list when no tech is supported or no file is playable.
pub fn select_sources(
    media_files: &[MediaFileDescriptor],
    tech_order: &[String],
    registry: &TechRegistry,
) -> Vec<SourceDescriptor> {
    let mut sources_by_tech: HashMap<&str, Vec<SourceDescriptor>> = HashMap::new();

    for tech_name in tech_order {
        let Some(tech) = registry.get(tech_name) else {
            debug!(tech = %tech_name, "no playback tech registered under this name");
            continue;
        };
        if !tech.is_supported() {
            continue;
        }
        for media_file in media_files {
            let source = SourceDescriptor::from(media_file);
            if tech.can_play_source(&source) {
                sources_by_tech
                    .entry(tech_name.as_str())
                    .or_default()
                    .push(source);
            }
        }
    }

    // Flatten in preferred tech order
    let mut sources = Vec::new();
    for tech_name in tech_order {
        if let Some(bucket) = sources_by_tech.remove(tech_name.as_str()) {
            sources.extend(bucket);
        }
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tech::MimeTech;

    fn media_file(url: &str, mime: &str) -> MediaFileDescriptor {
        MediaFileDescriptor {
            file_url: url.into(),
            mime_type: mime.into(),
            width: 640,
            height: 360,
        }
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn registry() -> TechRegistry {
        let mut registry = TechRegistry::new();
        registry.register("html5", Box::new(MimeTech::new(true, ["video/mp4", "video/webm"])));
        registry.register("flash", Box::new(MimeTech::new(true, ["video/mp4", "video/flv"])));
        registry
    }

    #[test]
    fn ordered_by_tech_then_input_order() {
        let files = vec![
            media_file("a.flv", "video/flv"),
            media_file("b.webm", "video/webm"),
            media_file("c.mp4", "video/mp4"),
        ];
        let sources = select_sources(&files, &order(&["html5", "flash"]), &registry());

        let srcs: Vec<&str> = sources.iter().map(|s| s.src.as_str()).collect();
        // html5 bucket first (input order), then flash bucket
        assert_eq!(srcs, ["b.webm", "c.mp4", "a.flv", "c.mp4"]);
    }

    #[test]
    fn duplicates_across_techs_are_preserved() {
        let files = vec![media_file("ad.mp4", "video/mp4")];
        let sources = select_sources(&files, &order(&["html5", "flash"]), &registry());
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], sources[1]);
    }

    #[test]
    fn unplayable_mime_types_are_excluded() {
        let files = vec![
            media_file("ad.mov", "video/quicktime"),
            media_file("ad.mp4", "video/mp4"),
        ];
        let sources = select_sources(&files, &order(&["html5"]), &registry());
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].src, "ad.mp4");
    }

    #[test]
    fn unsupported_tech_contributes_nothing() {
        let mut registry = TechRegistry::new();
        registry.register("html5", Box::new(MimeTech::new(false, ["video/mp4"])));

        let files = vec![media_file("ad.mp4", "video/mp4")];
        assert!(select_sources(&files, &order(&["html5"]), &registry).is_empty());
    }

    #[test]
    fn unknown_tech_names_are_skipped() {
        let files = vec![media_file("ad.mp4", "video/mp4")];
        let sources = select_sources(&files, &order(&["silverlight", "html5"]), &registry());
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(select_sources(&[], &order(&["html5"]), &registry()).is_empty());
        let files = vec![media_file("ad.mp4", "video/mp4")];
        assert!(select_sources(&files, &[], &registry()).is_empty());
    }

    #[test]
    fn source_carries_media_file_fields() {
        let files = vec![media_file("ad.mp4", "video/mp4")];
        let sources = select_sources(&files, &order(&["html5"]), &registry());
        assert_eq!(sources[0].mime_type, "video/mp4");
        assert_eq!(sources[0].width, 640);
        assert_eq!(sources[0].height, 360);
    }
}
