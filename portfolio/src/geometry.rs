//! Section boundary lookup.

use std::collections::HashMap;

use crate::error::LayoutError;
use crate::tracker::{Bounds, SectionId};

/// Source of section boundaries, queried fresh on every scroll.
pub trait SectionGeometry {
    fn bounds(&self, section: SectionId) -> Result<Bounds, LayoutError>;
}

/// Live page geometry via `getElementById` + `getBoundingClientRect`.
pub struct DomGeometry {
    document: web_sys::Document,
}

impl DomGeometry {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Geometry of the window's current document.
    pub fn current() -> Result<Self, LayoutError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(LayoutError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl SectionGeometry for DomGeometry {
    fn bounds(&self, section: SectionId) -> Result<Bounds, LayoutError> {
        let element = self
            .document
            .get_element_by_id(section.anchor())
            .ok_or(LayoutError::MissingSection(section))?;
        Ok(element_bounds(&element))
    }
}

/// Viewport-relative bounds of any element.
pub fn element_bounds(element: &web_sys::Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.top(), rect.bottom())
}

/// Static layout snapshot. Sections not inserted are reported missing.
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    sections: HashMap<SectionId, Bounds>,
}

impl FixedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section: SectionId, bounds: Bounds) -> Self {
        self.sections.insert(section, bounds);
        self
    }

    /// Lay sections out back to back from `top`, one height per section in
    /// declared order, as if the page had been scrolled to `top`.
    pub fn stacked(top: f64, heights: [f64; 4]) -> Self {
        let mut layout = Self::new();
        let mut cursor = top;
        for (section, height) in SectionId::ALL.into_iter().zip(heights) {
            layout = layout.with(section, Bounds::new(cursor, cursor + height));
            cursor += height;
        }
        layout
    }
}

impl SectionGeometry for FixedLayout {
    fn bounds(&self, section: SectionId) -> Result<Bounds, LayoutError> {
        self.sections
            .get(&section)
            .copied()
            .ok_or(LayoutError::MissingSection(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_layout_reports_missing_sections() {
        let layout = FixedLayout::new().with(SectionId::Profile, Bounds::new(0.0, 10.0));
        assert_eq!(layout.bounds(SectionId::Profile), Ok(Bounds::new(0.0, 10.0)));
        assert_eq!(
            layout.bounds(SectionId::Projects),
            Err(LayoutError::MissingSection(SectionId::Projects))
        );
    }

    #[test]
    fn stacked_layout_is_contiguous() {
        let layout = FixedLayout::stacked(-1000.0, [800.0, 600.0, 400.0, 500.0]);
        assert_eq!(layout.bounds(SectionId::Profile), Ok(Bounds::new(-1000.0, -200.0)));
        assert_eq!(layout.bounds(SectionId::Experience), Ok(Bounds::new(-200.0, 400.0)));
        assert_eq!(layout.bounds(SectionId::Skills), Ok(Bounds::new(400.0, 800.0)));
        assert_eq!(layout.bounds(SectionId::Projects), Ok(Bounds::new(800.0, 1300.0)));
    }
}
