//! Active section tracking.
//!
//! The page is split into a fixed, ordered set of sections. On every scroll
//! the tracker drops a horizontal *probe line* a fixed distance below the
//! viewport top and picks the first section whose vertical span contains
//! it. When nothing contains the probe (gaps, overscroll) the previous
//! answer stands, so the nav bar never loses its highlight.
//!
//! Nothing here touches the DOM. Boundaries come in through
//! [`SectionGeometry`], which keeps the tracker testable on the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::SectionGeometry;

/// Default probe line, in CSS pixels from the viewport top.
pub const DEFAULT_PROBE_LINE: f64 = 100.0;

/// One named content block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Profile,
    Experience,
    Skills,
    Projects,
}

impl SectionId {
    /// Declared page order. Earlier entries win ties.
    pub const ALL: [SectionId; 4] = [
        SectionId::Profile,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
    ];

    /// DOM id of the section element.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Profile => "profile",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
        }
    }

    /// Nav bar label.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Profile => "Profile",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
        }
    }

    /// In-page link target, e.g. `#skills`.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Vertical extent of an element, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Inclusive on both edges.
    pub fn contains(&self, probe: f64) -> bool {
        self.top <= probe && self.bottom >= probe
    }

    /// True once any part of the element is inside a viewport of the given height.
    pub fn enters_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Tracker tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    pub probe_line: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            probe_line: DEFAULT_PROBE_LINE,
        }
    }
}

/// First section, in declared order, whose span contains `probe`.
///
/// Sections whose boundaries cannot be read are skipped.
pub fn section_in_view<G>(geometry: &G, probe: f64) -> Option<SectionId>
where
    G: SectionGeometry + ?Sized,
{
    SectionId::ALL
        .into_iter()
        .find(|&section| match geometry.bounds(section) {
            Ok(bounds) => bounds.contains(probe),
            Err(err) => {
                tracing::trace!(%section, %err, "skipping section");
                false
            }
        })
}

/// Owns the active section and recomputes it per scroll event.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    config: TrackerConfig,
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            active: SectionId::default(),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn probe_line(&self) -> f64 {
        self.config.probe_line
    }

    /// Recompute from current geometry.
    ///
    /// Returns the new section only when the active section changed.
    /// When no section contains the probe line the previous value is kept.
    pub fn on_scroll<G>(&mut self, geometry: &G) -> Option<SectionId>
    where
        G: SectionGeometry + ?Sized,
    {
        let found = section_in_view(geometry, self.config.probe_line)?;
        if found == self.active {
            return None;
        }
        tracing::debug!(from = %self.active, to = %found, "active section changed");
        self.active = found;
        Some(found)
    }
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
