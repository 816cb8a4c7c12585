use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::city::{CityId, city_key, normalize, parse_uf};

const EMBEDDED_CITIES: &str = include_str!("../data/cities.json");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct City {
    pub name: String,
    pub uf: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    /// The `"<city>-<UF>"` identifier clients send back.
    pub fn id(&self) -> String {
        format!("{}-{}", self.name, self.uf)
    }
}

impl From<&City> for geo_types::Point {
    fn from(value: &City) -> Self {
        geo_types::Point::new(value.lon, value.lat)
    }
}

#[derive(Debug, Error)]
pub enum CityCatalogError {
    #[error("Malformed city list: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("City {0} has an unknown federative unit")]
    UnknownUf(String),

    #[error("City {0} has coordinates out of range")]
    InvalidCoordinates(String),

    #[error("City {0} is listed twice")]
    Duplicate(String),
}

/// Cities a route can be priced between. This is also the list offered to
/// clients for autocomplete.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: Vec<City>,
    index: FxHashMap<String, usize>,
}

impl CityCatalog {
    pub fn embedded() -> Result<Self, CityCatalogError> {
        Self::from_json(EMBEDDED_CITIES)
    }

    pub fn from_json(json: &str) -> Result<Self, CityCatalogError> {
        let mut cities: Vec<City> = serde_json::from_str(json)?;
        cities.sort_by(|a, b| normalize(&a.name).cmp(&normalize(&b.name)).then(a.uf.cmp(&b.uf)));

        let mut index = FxHashMap::default();
        for (position, city) in cities.iter_mut().enumerate() {
            let uf = parse_uf(&city.uf).ok_or_else(|| CityCatalogError::UnknownUf(city.id()))?;
            city.uf = uf.to_owned();

            if !(-90.0..=90.0).contains(&city.lat) || !(-180.0..=180.0).contains(&city.lon) {
                return Err(CityCatalogError::InvalidCoordinates(city.id()));
            }

            if index.insert(city_key(&city.name, uf), position).is_some() {
                return Err(CityCatalogError::Duplicate(city.id()));
            }
        }

        Ok(CityCatalog { cities, index })
    }

    pub fn find(&self, id: &CityId) -> Option<&City> {
        self.index.get(&id.key()).map(|&position| &self.cities[position])
    }

    /// Cities matching an optional federative unit and an optional name
    /// fragment, ordered by name.
    pub fn search(&self, uf: Option<&str>, query: Option<&str>) -> Vec<&City> {
        let query = query.map(normalize).filter(|query| !query.is_empty());

        self.cities
            .iter()
            .filter(|city| uf.is_none_or(|uf| city.uf.eq_ignore_ascii_case(uf.trim())))
            .filter(|city| {
                query
                    .as_ref()
                    .is_none_or(|query| normalize(&city.name).contains(query.as_str()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
