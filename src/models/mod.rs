mod country;
mod phase;

pub use country::{CountryPool, PoolError, MIN_COUNTRIES};
pub use phase::Phase;
