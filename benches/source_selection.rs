//! Benchmarks for pre-roll source selection
//!
//! Source selection runs once per ad response, but media-file lists from
//! ad servers can carry dozens of renditions across several formats; this
//! measures the bucket-and-flatten pass across list sizes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vast_preroll::ad::model::MediaFileDescriptor;
use vast_preroll::ad::source::select_sources;
use vast_preroll::tech::{MimeTech, TechRegistry};

/// Generate a media-file list cycling through common renditions
fn generate_media_files(count: usize) -> Vec<MediaFileDescriptor> {
    let renditions = [
        (640, 360, "video/mp4"),
        (854, 480, "video/mp4"),
        (1280, 720, "video/webm"),
        (1920, 1080, "video/mp4"),
        (1280, 720, "video/flv"),
        (640, 360, "video/quicktime"),
    ];

    (0..count)
        .map(|i| {
            let (width, height, mime) = renditions[i % renditions.len()];
            MediaFileDescriptor {
                file_url: format!("https://ads-cdn.example.com/creatives/ad_{i:03}_{width}x{height}"),
                mime_type: mime.to_string(),
                width,
                height,
            }
        })
        .collect()
}

fn registry() -> TechRegistry {
    let mut registry = TechRegistry::new();
    registry.register("html5", Box::new(MimeTech::new(true, ["video/mp4", "video/webm"])));
    registry.register("flash", Box::new(MimeTech::new(true, ["video/mp4", "video/flv"])));
    registry
}

fn bench_select_sources(c: &mut Criterion) {
    let registry = registry();
    let tech_order = vec!["html5".to_string(), "flash".to_string()];

    let mut group = c.benchmark_group("select_sources");
    for count in [4, 16, 64] {
        let media_files = generate_media_files(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &media_files,
            |b, media_files| {
                b.iter(|| {
                    black_box(select_sources(
                        black_box(media_files),
                        &tech_order,
                        &registry,
                    ))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_select_sources);
criterion_main!(benches);
