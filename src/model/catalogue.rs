//! Catalogue of purchasable cabin and container unit types.

use serde::{Deserialize, Serialize, Serializer};

/// Unit dimensions in metres, in the unrotated (yaw = 0) orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dims {
    /// Length along the x axis.
    pub len: f64,
    /// Width along the z axis.
    pub wid: f64,
    /// Height (vertical, never affected by rotation).
    pub ht: f64,
}

impl Dims {
    /// Create new dimensions.
    pub const fn new(len: f64, wid: f64, ht: f64) -> Self {
        Self { len, wid, ht }
    }
}

/// A purchasable unit type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Stock keeping unit, unique per entry.
    pub sku: String,
    /// Human-readable name.
    pub label: String,
    /// Unrotated dimensions.
    pub dims: Dims,
    /// Rental price per unit per week.
    #[serde(rename = "weeklyRate")]
    pub weekly_rate: f64,
}

impl CatalogueEntry {
    /// Create a new catalogue entry.
    pub fn new(
        sku: impl Into<String>,
        label: impl Into<String>,
        dims: Dims,
        weekly_rate: f64,
    ) -> Self {
        Self {
            sku: sku.into(),
            label: label.into(),
            dims,
            weekly_rate,
        }
    }
}

/// Registry of unit types keyed by type identifier.
///
/// Iteration follows insertion order. Lookups of unknown identifiers
/// return `None`; callers treat that as "ignore this item".
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: Vec<(String, CatalogueEntry)>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in range of site cabins and shipping containers.
    pub fn standard() -> Self {
        let mut catalogue = Self::new();
        catalogue.insert(
            "office6m",
            CatalogueEntry::new("OFF-6", "Office 6m", Dims::new(6.0, 3.0, 2.7), 210.0),
        );
        catalogue.insert(
            "office12m",
            CatalogueEntry::new("OFF-12", "Office 12m", Dims::new(12.0, 3.0, 2.7), 380.0),
        );
        catalogue.insert(
            "toilet",
            CatalogueEntry::new("TOI-2", "Toilet (2 pan)", Dims::new(2.4, 1.4, 2.7), 120.0),
        );
        catalogue.insert(
            "ablution",
            CatalogueEntry::new("ABL-6", "Ablution 6m", Dims::new(6.0, 3.0, 2.7), 260.0),
        );
        catalogue.insert(
            "lunch",
            CatalogueEntry::new("LUN-6", "Lunchroom 6m", Dims::new(6.0, 3.0, 2.7), 230.0),
        );
        catalogue.insert(
            "cont20",
            CatalogueEntry::new("CON-20", "Container 20ft", Dims::new(6.06, 2.44, 2.59), 75.0),
        );
        catalogue.insert(
            "cont40",
            CatalogueEntry::new("CON-40", "Container 40ft", Dims::new(12.19, 2.44, 2.59), 120.0),
        );
        catalogue
    }

    /// Look up an entry by type identifier.
    pub fn get(&self, type_id: &str) -> Option<&CatalogueEntry> {
        self.entries
            .iter()
            .find(|(id, _)| id == type_id)
            .map(|(_, entry)| entry)
    }

    /// Check if a type identifier resolves.
    pub fn contains(&self, type_id: &str) -> bool {
        self.get(type_id).is_some()
    }

    /// Insert or replace an entry. Replacing keeps the original position.
    pub fn insert(&mut self, type_id: impl Into<String>, entry: CatalogueEntry) {
        let type_id = type_id.into();
        match self.entries.iter_mut().find(|(id, _)| *id == type_id) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((type_id, entry)),
        }
    }

    /// Remove an entry, returning it if present.
    ///
    /// Items already placed with this type become orphaned and are
    /// excluded from geometry and ordering from then on.
    pub fn remove(&mut self, type_id: &str) -> Option<CatalogueEntry> {
        let idx = self.entries.iter().position(|(id, _)| id == type_id)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterate over `(type_id, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogueEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalogue has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a `type_id -> entry` map in catalogue order.
impl Serialize for Catalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
