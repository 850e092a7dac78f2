use std::collections::HashSet;

use thiserror::Error;

use crate::quiz::CHOICES_PER_ROUND;

/// Smallest pool that still leaves at least one round to play.
pub const MIN_COUNTRIES: usize = CHOICES_PER_ROUND + 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("a game needs at least {required} countries, found {found}")]
    TooFewCountries { found: usize, required: usize },
    #[error("country `{0}` appears more than once")]
    DuplicateCountry(String),
    #[error("country names must not be blank")]
    BlankName,
}

/// The canonical, duplicate-free list of countries a game is dealt from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPool {
    names: Vec<String>,
}

impl CountryPool {
    pub fn new<I, S>(names: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.trim().is_empty() {
                return Err(PoolError::BlankName);
            }
            if !seen.insert(name.as_str()) {
                return Err(PoolError::DuplicateCountry(name.clone()));
            }
        }

        if names.len() < MIN_COUNTRIES {
            return Err(PoolError::TooFewCountries {
                found: names.len(),
                required: MIN_COUNTRIES,
            });
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
