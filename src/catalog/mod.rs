//! Static destination catalog
//!
//! Regions (US states) map to ordered lists of destinations. The catalog is
//! built once at startup, either from the built-in seed set or from a JSON
//! seed file, and is read-only afterwards.

pub mod seed;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::models::Destination;
use crate::{Result, TripMateError};

/// Normalize a lookup key: trim, collapse inner whitespace, lowercase.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone)]
struct Region {
    name: String,
    destinations: Vec<Destination>,
}

/// Read-only catalog of destinations grouped by region
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    regions: BTreeMap<String, Region>,
}

/// Seed file entry
#[derive(Debug, Deserialize)]
struct SeedDestination {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl Catalog {
    /// Build a catalog from `(region, destinations)` pairs. Regions whose
    /// names normalize to the same key are merged in input order.
    pub fn from_regions<I>(regions: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Destination>)>,
    {
        let mut map: BTreeMap<String, Region> = BTreeMap::new();
        for (name, destinations) in regions {
            let region = map.entry(normalize_key(&name)).or_insert_with(|| Region {
                name: name.trim().to_string(),
                destinations: Vec::new(),
            });
            let display = region.name.clone();
            region
                .destinations
                .extend(destinations.into_iter().map(|mut d| {
                    d.region = display.clone();
                    d
                }));
        }
        Self { regions: map }
    }

    /// Catalog populated from the built-in seed set
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_regions(seed::regions())
    }

    /// Load a catalog from a JSON file of the form
    /// `{"Arizona": [{"name": "Sedona", "description": "..."}]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} regions from seed file {}",
            catalog.regions.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON seed text
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: BTreeMap<String, Vec<SeedDestination>> = serde_json::from_str(raw)?;

        let mut regions = Vec::with_capacity(parsed.len());
        for (region, entries) in parsed {
            if region.trim().is_empty() {
                return Err(TripMateError::validation("Seed region name cannot be blank"));
            }
            let mut destinations = Vec::with_capacity(entries.len());
            for entry in entries {
                let name = entry.name.trim();
                if name.is_empty() {
                    return Err(TripMateError::validation(format!(
                        "Seed destination in {region} has a blank name"
                    )));
                }
                destinations.push(Destination {
                    name: name.to_string(),
                    region: region.clone(),
                    description: entry.description,
                });
            }
            regions.push((region, destinations));
        }

        Ok(Self::from_regions(regions))
    }

    /// Destinations for a region; empty when the region is unknown
    #[must_use]
    pub fn lookup(&self, region: &str) -> &[Destination] {
        self.regions
            .get(&normalize_key(region))
            .map(|r| r.destinations.as_slice())
            .unwrap_or_default()
    }

    /// Display names of all regions, sorted
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.values().map(|r| r.name.as_str())
    }

    /// Destination names containing `query`, case-insensitively
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = normalize_key(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        self.regions
            .values()
            .flat_map(|r| r.destinations.iter())
            .filter(|d| normalize_key(&d.name).contains(&needle))
            .filter(|d| seen.insert(d.name.clone()))
            .take(limit)
            .map(|d| d.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
