use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::{CountryCatalog, CountryEntry};
use crate::models::PoolError;

const BUILTIN_COUNTRIES: &str = include_str!("../../assets/countries.json");
const BUILTIN_ORIGIN: &str = "built-in catalogue";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} must contain at least one country")]
    Empty(String),
    #[error("country `{country}` has an invalid flag code `{code}`")]
    InvalidCode { country: String, code: String },
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// The 23 European countries the game ships with.
pub fn load_builtin_catalog() -> Result<CountryCatalog, LoadError> {
    parse_catalog(BUILTIN_COUNTRIES, BUILTIN_ORIGIN)
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<CountryCatalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&json_content, &path.display().to_string())
}

fn parse_catalog(json_content: &str, origin: &str) -> Result<CountryCatalog, LoadError> {
    let entries: Vec<CountryEntry> =
        serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    if entries.is_empty() {
        return Err(LoadError::Empty(origin.to_string()));
    }

    debug!("loaded {} countries from {}", entries.len(), origin);
    CountryCatalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = load_builtin_catalog().unwrap();
        assert_eq!(catalog.pool().len(), 23);
        assert!(catalog.pool().contains("Bosnia And Herzegovina"));
        assert_eq!(catalog.flags().flag("Germany").unwrap().code, "DE");
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        let err = parse_catalog("[]", "test").unwrap_err();
        assert!(matches!(err, LoadError::Empty(ref origin) if origin == "test"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_catalog(r#"[{"name": "Austria"}]"#, "test").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_small_pool() {
        let json = r#"[
            {"name": "Austria", "code": "AT"},
            {"name": "Andorra", "code": "AD"}
        ]"#;
        let err = parse_catalog(json, "test").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Pool(PoolError::TooFewCountries { found: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_catalog_from_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
