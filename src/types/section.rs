//! Section layout snapshot used for scroll-driven navigation highlighting

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a page section (the element id, without the leading `#`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        match id.strip_prefix('#') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(id),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment form used by navigation links, e.g. `#about`
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vertical extent of one section, in document coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SectionExtentRaw")]
pub struct SectionExtent {
    id: SectionId,
    top_offset: f64,
    height: f64,
}

impl SectionExtent {
    /// Measured extent; negative or non-finite dimensions are rejected
    pub fn new(id: impl Into<SectionId>, top_offset: f64, height: f64) -> Result<Self, CoreError> {
        let id = id.into();
        if !top_offset.is_finite() {
            return Err(CoreError::invalid_extent(id.as_str(), "top offset is not finite"));
        }
        if !height.is_finite() {
            return Err(CoreError::invalid_extent(id.as_str(), "height is not finite"));
        }
        if height < 0.0 {
            return Err(CoreError::invalid_extent(
                id.as_str(),
                format!("negative height {height}"),
            ));
        }
        Ok(Self {
            id,
            top_offset,
            height,
        })
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn top_offset(&self) -> f64 {
        self.top_offset
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top_offset + self.height
    }

    /// Half-open containment: `top <= y < top + height`
    pub fn contains(&self, y: f64) -> bool {
        self.top_offset <= y && y < self.bottom()
    }
}

#[derive(Deserialize)]
struct SectionExtentRaw {
    id: SectionId,
    top_offset: f64,
    height: f64,
}

impl TryFrom<SectionExtentRaw> for SectionExtent {
    type Error = CoreError;

    fn try_from(raw: SectionExtentRaw) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.top_offset, raw.height)
    }
}

/// A validated snapshot of every tracked section, in document order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SectionLayoutRaw")]
pub struct SectionLayout {
    extents: Vec<SectionExtent>,
}

impl SectionLayout {
    pub fn new(extents: Vec<SectionExtent>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for extent in &extents {
            if !seen.insert(extent.id()) {
                return Err(CoreError::duplicate_section(extent.id().as_str()));
            }
        }
        Ok(Self { extents })
    }

    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    pub fn get(&self, id: &SectionId) -> Option<&SectionExtent> {
        self.extents.iter().find(|extent| extent.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }
}

#[derive(Deserialize)]
struct SectionLayoutRaw {
    extents: Vec<SectionExtent>,
}

impl TryFrom<SectionLayoutRaw> for SectionLayout {
    type Error = CoreError;

    fn try_from(raw: SectionLayoutRaw) -> Result<Self, Self::Error> {
        Self::new(raw.extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_id_drops_fragment_prefix() {
        let id: SectionId = serde_json::from_str(r##""#about""##).unwrap();
        assert_eq!(id.as_str(), "about");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""about""#);
    }

    #[test]
    fn deserialized_extent_rejects_negative_height() {
        let json = r#"{"id":"a","top_offset":0.0,"height":-50.0}"#;
        let err = serde_json::from_str::<SectionExtent>(json).unwrap_err();
        assert!(err.to_string().contains("negative height"));
    }

    #[test]
    fn deserialized_layout_rejects_duplicate_ids() {
        let json = r##"{"extents":[
            {"id":"#a","top_offset":0.0,"height":10.0},
            {"id":"#a","top_offset":10.0,"height":10.0}
        ]}"##;
        let err = serde_json::from_str::<SectionLayout>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate section id 'a'"));
    }

    #[test]
    fn serialized_layout_round_trips() {
        let layout = SectionLayout::new(vec![
            SectionExtent::new("home", 0.0, 900.0).unwrap(),
            SectionExtent::new("about", 900.0, 700.0).unwrap(),
        ])
        .unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(serde_json::from_str::<SectionLayout>(&json).unwrap(), layout);
    }
}
