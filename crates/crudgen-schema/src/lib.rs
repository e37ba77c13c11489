//! Catalog data model for CrudGen: table descriptors, key roles, the
//! candidate predicate, and the catalog source boundary.

pub mod catalog;
pub mod table;
pub mod validate;

pub use catalog::{Catalog, CatalogError, JsonCatalog};
pub use table::{Field, KeyRole, Table};
pub use validate::{SchemaError, validate_tables};
