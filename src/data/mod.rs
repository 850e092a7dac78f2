mod flags;
mod loader;

pub use flags::{CountryCatalog, CountryEntry, Flag, FlagStore};
pub use loader::{LoadError, load_builtin_catalog, load_catalog_from_json};
