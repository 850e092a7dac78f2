use std::collections::HashMap;

use serde::Deserialize;

use super::LoadError;
use crate::models::CountryPool;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// One record of a country catalogue file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, e.g. `AT`.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub code: String,
    /// The flag as a pair of Unicode regional indicator symbols.
    pub glyph: String,
}

impl Flag {
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }

        let glyph = code
            .bytes()
            .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
            .collect::<Option<String>>()?;

        Some(Self { code, glyph })
    }
}

/// Looks up the flag to draw for a country name.
#[derive(Debug, Clone, Default)]
pub struct FlagStore {
    flags: HashMap<String, Flag>,
}

impl FlagStore {
    pub fn flag(&self, country: &str) -> Option<&Flag> {
        self.flags.get(country)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// A validated set of countries together with their flags.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    pool: CountryPool,
    flags: FlagStore,
}

impl CountryCatalog {
    pub fn new(entries: Vec<CountryEntry>) -> Result<Self, LoadError> {
        let mut flags = HashMap::with_capacity(entries.len());
        for entry in &entries {
            let flag = Flag::from_code(&entry.code).ok_or_else(|| LoadError::InvalidCode {
                country: entry.name.clone(),
                code: entry.code.clone(),
            })?;
            flags.insert(entry.name.clone(), flag);
        }

        let pool = CountryPool::new(entries.into_iter().map(|entry| entry.name))?;

        Ok(Self {
            pool,
            flags: FlagStore { flags },
        })
    }

    pub fn pool(&self) -> &CountryPool {
        &self.pool
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn into_parts(self) -> (CountryPool, FlagStore) {
        (self.pool, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PoolError;

    fn entry(name: &str, code: &str) -> CountryEntry {
        CountryEntry {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    fn five() -> Vec<CountryEntry> {
        vec![
            entry("Austria", "AT"),
            entry("Andorra", "AD"),
            entry("Albania", "AL"),
            entry("Bulgaria", "BG"),
            entry("Belgium", "BE"),
        ]
    }

    #[test]
    fn test_flag_glyph_from_code() {
        let flag = Flag::from_code("at").unwrap();
        assert_eq!(flag.code, "AT");
        assert_eq!(flag.glyph, "\u{1F1E6}\u{1F1F9}");
        assert!(Flag::from_code("AUT").is_none());
        assert!(Flag::from_code("A1").is_none());
        assert!(Flag::from_code("").is_none());
    }

    #[test]
    fn test_catalog_builds_pool_and_flags() {
        let catalog = CountryCatalog::new(five()).unwrap();
        assert_eq!(catalog.pool().len(), 5);
        assert_eq!(catalog.flags().len(), 5);
        assert_eq!(catalog.flags().flag("Belgium").unwrap().code, "BE");
        assert!(catalog.flags().flag("Atlantis").is_none());
    }

    #[test]
    fn test_catalog_rejects_bad_code() {
        let mut entries = five();
        entries[2].code = "XYZ".to_string();
        let err = CountryCatalog::new(entries).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidCode { ref country, .. } if country == "Albania"
        ));
    }

    #[test]
    fn test_catalog_rejects_duplicate_names() {
        let mut entries = five();
        entries.push(entry("Austria", "AT"));
        let err = CountryCatalog::new(entries).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Pool(PoolError::DuplicateCountry(ref name)) if name == "Austria"
        ));
    }
}
