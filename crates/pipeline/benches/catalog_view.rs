//! Benchmarks for the catalog view pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog a few times larger than a real content hub.

use catalog::{CatalogEntry, FacetKind, FacetRef, Format};
use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{extract_featured, merge, paginate, select, sort, FeaturedFilter, FilterSet, SortKey};

fn synthetic_catalog(size: usize) -> Vec<CatalogEntry> {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let formats = [Format::Video, Format::Document, Format::Async, Format::LiveReplay];

    (0..size)
        .map(|i| {
            let mut entry = CatalogEntry::new(format!("e-{}", i), format!("Entry number {}", i));
            entry.description = format!("Synthetic description for topic {}", i % 17);
            entry.products = vec![FacetRef::new(format!("p-{}", i % 7), "Product")];
            entry.teams = vec![
                FacetRef::new(format!("t-{}", i % 5), "Team"),
                FacetRef::new(format!("t-{}", (i + 1) % 5), "Team"),
            ];
            entry.topics = vec![FacetRef::new(format!("topic-{}", i % 11), "Topic")];
            entry.format = Some(formats[i % formats.len()]);
            entry.publish_date = Some(epoch + TimeDelta::hours(i as i64));
            entry.priority = Some((i % 10) as i64);
            entry.show_in_upcoming = i % 13 == 0;
            entry
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    let filters = FilterSet::new()
        .with_ids(FacetKind::Products, ["p-1", "p-3"])
        .with_ids(FacetKind::Teams, ["t-2"])
        .with_search("topic 4");

    c.bench_function("select_2000_entries", |b| {
        b.iter(|| {
            let visible = select(black_box(&catalog), black_box(&filters));
            black_box(visible)
        })
    });
}

fn bench_full_render(c: &mut Criterion) {
    let catalog = synthetic_catalog(2_000);
    let defaults = FilterSet::new().with_ids(FacetKind::Products, ["p-1", "p-2", "p-3"]);
    let user = FilterSet::new().with_format(Format::Video);
    let featured = FeaturedFilter {
        show_in_upcoming: true,
        ..FeaturedFilter::default()
    };
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    c.bench_function("render_page_2000_entries", |b| {
        b.iter(|| {
            let effective = merge(&defaults, black_box(&user));
            let visible = sort(&select(&catalog, &effective), SortKey::Priority);
            let all = sort(&catalog.iter().collect::<Vec<_>>(), SortKey::Priority);
            let split = extract_featured(&all, &visible, &featured, 3, now);
            black_box(paginate(&split.remainder, 12, 2))
        })
    });
}

criterion_group!(benches, bench_select, bench_full_render);
criterion_main!(benches);
