//! File layer for gearkit: catalog and heuristics loading, validation and
//! the home directory.

pub mod error;
pub mod file;
pub mod home;
pub mod validate;

pub use error::{CatalogError, Result};
pub use file::{
    CatalogFormat, load_catalog, load_heuristics, parse_catalog, render_catalog, save_catalog,
};
pub use home::GearHome;
pub use validate::validate;
