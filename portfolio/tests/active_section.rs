//! Scroll scenarios for the active section tracker, replayed against
//! fixed layouts.

use portfolio::geometry::FixedLayout;
use portfolio::tracker::{ActiveSectionTracker, Bounds, SectionId, TrackerConfig};
use pretty_assertions::assert_eq;

const HEIGHTS: [f64; 4] = [800.0, 900.0, 700.0, 600.0];

fn tracker() -> ActiveSectionTracker {
    ActiveSectionTracker::new(TrackerConfig::default())
}

#[test]
fn starts_on_profile_before_any_scroll() {
    assert_eq!(tracker().active(), SectionId::Profile);
}

#[test]
fn top_of_page_selects_profile() {
    let mut tracker = tracker();
    let layout = FixedLayout::stacked(0.0, HEIGHTS);
    tracker.on_scroll(&layout);
    assert_eq!(tracker.active(), SectionId::Profile);
}

#[test]
fn experience_spanning_probe_becomes_active() {
    let mut tracker = tracker();
    let layout = FixedLayout::new()
        .with(SectionId::Profile, Bounds::new(-720.0, 80.0))
        .with(SectionId::Experience, Bounds::new(80.0, 900.0))
        .with(SectionId::Skills, Bounds::new(900.0, 1600.0))
        .with(SectionId::Projects, Bounds::new(1600.0, 2200.0));
    assert_eq!(tracker.on_scroll(&layout), Some(SectionId::Experience));
    assert_eq!(tracker.active(), SectionId::Experience);
}

#[test]
fn overlapping_spans_pick_earliest_declared() {
    let mut tracker = tracker();
    let layout = FixedLayout::new()
        .with(SectionId::Skills, Bounds::new(0.0, 500.0))
        .with(SectionId::Projects, Bounds::new(50.0, 600.0));
    tracker.on_scroll(&layout);
    assert_eq!(tracker.active(), SectionId::Skills);

    let layout = layout.with(SectionId::Experience, Bounds::new(90.0, 110.0));
    tracker.on_scroll(&layout);
    assert_eq!(tracker.active(), SectionId::Experience);
}

#[test]
fn gap_under_probe_keeps_previous_section() {
    let mut tracker = tracker();
    tracker.on_scroll(&FixedLayout::new().with(SectionId::Skills, Bounds::new(0.0, 400.0)));
    assert_eq!(tracker.active(), SectionId::Skills);

    // Probe falls between skills and projects.
    let gap = FixedLayout::new()
        .with(SectionId::Skills, Bounds::new(-400.0, 60.0))
        .with(SectionId::Projects, Bounds::new(140.0, 700.0));
    assert_eq!(tracker.on_scroll(&gap), None);
    assert_eq!(tracker.active(), SectionId::Skills);

    // Scrolled past everything.
    let past = FixedLayout::stacked(-5000.0, HEIGHTS);
    assert_eq!(tracker.on_scroll(&past), None);
    assert_eq!(tracker.active(), SectionId::Skills);
}

#[test]
fn unrendered_sections_are_skipped() {
    let mut tracker = tracker();
    let layout = FixedLayout::new().with(SectionId::Projects, Bounds::new(0.0, 600.0));
    assert_eq!(tracker.on_scroll(&layout), Some(SectionId::Projects));

    assert_eq!(tracker.on_scroll(&FixedLayout::new()), None);
    assert_eq!(tracker.active(), SectionId::Projects);
}

#[test]
fn probe_on_section_edge_counts_as_inside() {
    let mut tracker = tracker();
    let layout = FixedLayout::new().with(SectionId::Experience, Bounds::new(100.0, 900.0));
    tracker.on_scroll(&layout);
    assert_eq!(tracker.active(), SectionId::Experience);

    let layout = FixedLayout::new().with(SectionId::Skills, Bounds::new(-500.0, 100.0));
    tracker.on_scroll(&layout);
    assert_eq!(tracker.active(), SectionId::Skills);
}

#[test]
fn rapid_scroll_walks_every_section_in_order() {
    let mut tracker = tracker();
    let mut seen = vec![tracker.active()];

    // One event per section, each putting the next section under the probe.
    let mut offset = 0.0;
    for height in HEIGHTS {
        let layout = FixedLayout::stacked(-offset, HEIGHTS);
        if let Some(section) = tracker.on_scroll(&layout) {
            seen.push(section);
        }
        offset += height;
    }

    assert_eq!(
        seen,
        vec![
            SectionId::Profile,
            SectionId::Experience,
            SectionId::Skills,
            SectionId::Projects,
        ]
    );
    assert_eq!(tracker.active(), SectionId::Projects);
}
