//! Land-use class colors
//!
//! Labels arrive verbatim from classification datasets, so lookup is exact
//! and case-sensitive. Anything not in the table gets the fallback color.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::core_types::Rgb;

/// Land-use palette shipped with the cooling simulator
const LAND_USE_PALETTE: [(&str, Rgb); 15] = [
    ("Agricultural Areas", Rgb::new(0xf4, 0xa4, 0x60)),
    ("Airports", Rgb::new(0xa9, 0xa9, 0xa9)),
    ("Artificial Surfaces", Rgb::new(0xcd, 0x5c, 0x5c)),
    ("Cemeteries", Rgb::new(0x55, 0x6b, 0x2f)),
    ("Collector Line", Rgb::new(0x80, 0x80, 0x80)),
    ("Domestic gardens", Rgb::new(0x90, 0xee, 0x90)),
    ("Green urban area", Rgb::new(0x22, 0x8b, 0x22)),
    (
        "Industrial_Commercial_Public_Education units",
        Rgb::new(0xbc, 0x8f, 0x8f),
    ),
    (
        "Linear plantations along roads, rivers",
        Rgb::new(0x32, 0xcd, 0x32),
    ),
    ("Mines,dumps & construction sites", Rgb::new(0x8b, 0x45, 0x13)),
    ("Natural and Seminatural Areas", Rgb::new(0x6b, 0x8e, 0x23)),
    ("Railways", Rgb::new(0x69, 0x69, 0x69)),
    ("Sports & leisure facilities", Rgb::new(0x98, 0xfb, 0x98)),
    ("Urban parks", Rgb::new(0x2e, 0x8b, 0x57)),
    ("Water", Rgb::new(0x41, 0x69, 0xe1)),
];

static LAND_USE: LazyLock<ClassColorTable> = LazyLock::new(ClassColorTable::land_use);

/// Class label → color table with a fallback for unknown labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassColorTable {
    classes: FxHashMap<String, Rgb>,
    fallback: Rgb,
}

impl ClassColorTable {
    /// Neutral gray for unrecognized or missing labels
    pub const DEFAULT_FALLBACK: Rgb = Rgb::new(0xbd, 0xbd, 0xbd);

    /// Empty table that maps everything to `fallback`
    #[must_use]
    pub fn new(fallback: Rgb) -> Self {
        Self {
            classes: FxHashMap::default(),
            fallback,
        }
    }

    /// The 15-class land-use palette
    #[must_use]
    pub fn land_use() -> Self {
        LAND_USE_PALETTE
            .iter()
            .fold(Self::new(Self::DEFAULT_FALLBACK), |table, &(label, color)| {
                table.with_class(label, color)
            })
    }

    /// Add or replace one class
    #[must_use]
    pub fn with_class(mut self, label: impl Into<String>, color: Rgb) -> Self {
        self.classes.insert(label.into(), color);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Rgb) -> Self {
        self.fallback = fallback;
        self
    }

    /// Exact-match lookup; unknown and empty labels get the fallback
    #[must_use]
    pub fn color_for(&self, label: &str) -> Rgb {
        self.classes.get(label).copied().unwrap_or(self.fallback)
    }

    /// Lookup for an optional label (absent → fallback)
    #[must_use]
    pub fn color_for_label(&self, label: Option<&str>) -> Rgb {
        label.map_or(self.fallback, |label| self.color_for(label))
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.classes.contains_key(label)
    }

    #[must_use]
    pub fn fallback(&self) -> Rgb {
        self.fallback
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Entries sorted by label, for legends
    #[must_use]
    pub fn legend(&self) -> Vec<(&str, Rgb)> {
        let mut entries: Vec<_> = self
            .classes
            .iter()
            .map(|(label, color)| (label.as_str(), *color))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for ClassColorTable {
    fn default() -> Self {
        Self::land_use()
    }
}

/// Land-use color for `label`, using a shared read-only table
#[must_use]
pub fn color_for_class(label: &str) -> Rgb {
    LAND_USE.color_for(label)
}
