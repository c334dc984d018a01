//! Reference data: the province table (with geometry and capitals) and the
//! flat city list used to populate the capital answer choices.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Property key carrying the province name in the source GeoJSON.
pub const PROVINCE_NAME_KEY: &str = "NAMA_PROVINSI";
/// Property key carrying the capital name in the source GeoJSON.
pub const CAPITAL_NAME_KEY: &str = "NAMA_IBUKOTA";
/// CSV column carrying city names in the city reference table.
pub const CITY_NAME_COLUMN: &str = "NAMA_KAB_KOTA";

/// Errors raised while loading reference data. All of these are fatal at
/// session startup; loading happens once, outside the per-turn loop.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("province data is not valid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("province data contains no features")]
    EmptyCollection,
    #[error("feature {feature} is missing required property {property:?}")]
    MissingProperty { feature: usize, property: &'static str },
    #[error("feature {feature} has no polygonal geometry")]
    BadGeometry { feature: usize },
    #[error("city table is missing required column {column:?}")]
    MissingColumn { column: &'static str },
    #[error("city table contains no rows")]
    EmptyTable,
}

/// Polygonal GeoJSON geometry. The quiz core never interprets coordinates;
/// it only carries them through to the map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl Geometry {
    /// Iterate over every linear ring regardless of polygon nesting.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Vec<[f64; 2]>> + '_> {
        match self {
            Self::Polygon(rings) => Box::new(rings.iter()),
            Self::MultiPolygon(polys) => Box::new(polys.iter().flatten()),
        }
    }
}

/// One quiz subject: a province, its capital, and its assigned position in
/// the randomized question order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub name: String,
    pub capital: String,
    pub geometry: Geometry,
    /// Position in the question order, `1..=N`. A bijection over the
    /// catalog: exactly one province owns each sequence number.
    pub sequence: u32,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
    #[serde(default)]
    geometry: Option<serde_json::Value>,
}

#[derive(Deserialize, Default)]
struct FeatureProperties {
    #[serde(rename = "NAMA_PROVINSI")]
    province: Option<String>,
    #[serde(rename = "NAMA_IBUKOTA")]
    capital: Option<String>,
}

/// The full province table for one session. The sequence permutation is
/// drawn exactly once, when the catalog is built; clones share it and
/// nothing ever reshuffles an existing catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceCatalog {
    provinces: Vec<Province>,
}

impl ProvinceCatalog {
    /// Parse a GeoJSON FeatureCollection and assign a uniform random
    /// question order to its provinces.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the JSON is malformed, the collection
    /// is empty, or any feature lacks a province name, capital name, or
    /// polygonal geometry.
    pub fn from_geojson(json: &str, rng: &mut impl Rng) -> Result<Self, CatalogError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        if collection.features.is_empty() {
            return Err(CatalogError::EmptyCollection);
        }

        let mut provinces = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let name = feature
                .properties
                .province
                .ok_or(CatalogError::MissingProperty {
                    feature: index,
                    property: PROVINCE_NAME_KEY,
                })?;
            let capital = feature
                .properties
                .capital
                .ok_or(CatalogError::MissingProperty {
                    feature: index,
                    property: CAPITAL_NAME_KEY,
                })?;
            let geometry = feature.geometry.ok_or(CatalogError::MissingProperty {
                feature: index,
                property: "geometry",
            })?;
            let geometry: Geometry = serde_json::from_value(geometry)
                .map_err(|_| CatalogError::BadGeometry { feature: index })?;
            provinces.push(Province {
                name,
                capital,
                geometry,
                sequence: 0,
            });
        }

        // Fisher-Yates permutation of 1..=N, drawn once per catalog.
        let mut order: Vec<u32> = (1..=provinces.len() as u32).collect();
        order.shuffle(rng);
        for (province, sequence) in provinces.iter_mut().zip(order) {
            province.sequence = sequence;
        }

        Ok(Self { provinces })
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.provinces.len() as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Province> {
        self.provinces.iter()
    }

    /// The province holding a given sequence number, if any.
    #[must_use]
    pub fn by_sequence(&self, sequence: u32) -> Option<&Province> {
        self.provinces.iter().find(|p| p.sequence == sequence)
    }

    /// Distinct province names in catalog order, for the answer choice list.
    #[must_use]
    pub fn province_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.provinces.len());
        for province in &self.provinces {
            if !names.contains(&province.name) {
                names.push(province.name.clone());
            }
        }
        names
    }
}

/// The flat city reference table. Cities are only matched by name; the list
/// deliberately contains more cities than capitals so the capital selector
/// has distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityIndex {
    names: Vec<String>,
}

impl CityIndex {
    /// Parse a header-addressed CSV with a `NAMA_KAB_KOTA` column.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the column is absent or no data rows
    /// follow the header.
    pub fn from_csv(csv: &str) -> Result<Self, CatalogError> {
        let mut lines = csv.lines().filter(|l| !l.trim().is_empty());
        let header = lines.next().ok_or(CatalogError::EmptyTable)?;
        let column = header
            .split(',')
            .position(|col| col.trim().trim_matches('"') == CITY_NAME_COLUMN)
            .ok_or(CatalogError::MissingColumn {
                column: CITY_NAME_COLUMN,
            })?;

        let mut names = Vec::new();
        for line in lines {
            let Some(cell) = line.split(',').nth(column) else {
                continue;
            };
            let name = cell.trim().trim_matches('"');
            if name.is_empty() {
                continue;
            }
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        if names.is_empty() {
            return Err(CatalogError::EmptyTable);
        }
        Ok(Self { names })
    }

    /// Distinct city names in first-seen order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
