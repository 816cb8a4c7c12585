use std::{fmt::Display, str::FromStr};

use antt_pricing::distance::RouteError;

/// The 27 Brazilian federative units.
pub const FEDERATIVE_UNITS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// A `"<city>-<UF>"` identifier, e.g. `São José dos Campos-SP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityId {
    name: String,
    uf: &'static str,
}

impl CityId {
    pub fn new(name: &str, uf: &str) -> Option<Self> {
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return None;
        }

        let uf = parse_uf(uf)?;

        Some(CityId { name, uf })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uf(&self) -> &'static str {
        self.uf
    }

    /// Case and accent insensitive key, used for catalogue lookups.
    pub fn key(&self) -> String {
        city_key(&self.name, self.uf)
    }
}

impl FromStr for CityId {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, uf) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| RouteError::InvalidCity(s.to_owned()))?;

        CityId::new(name, uf).ok_or_else(|| RouteError::InvalidCity(s.to_owned()))
    }
}

impl Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.uf)
    }
}

pub fn parse_uf(uf: &str) -> Option<&'static str> {
    let uf = uf.trim();
    FEDERATIVE_UNITS
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(uf))
}

pub(crate) fn city_key(name: &str, uf: &str) -> String {
    format!("{}-{}", normalize(name), uf.to_ascii_uppercase())
}

/// Lowercases, strips Portuguese diacritics and collapses whitespace.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            '\'' | '’' => ' ',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
