//! Floor plan catalog built from a project's `floorPlans.json`.

mod catalog;

pub use catalog::{build_catalog, CatalogError, FloorPlanCatalog, FloorPlanRecord};
pub(crate) use catalog::read_project_json;

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
