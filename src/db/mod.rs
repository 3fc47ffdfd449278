pub mod records;
pub mod store;

pub use records::{Country, Mineral, ProductionStats, Role, Site, User};
pub use store::{CsvStore, StoreError, TableRecord};
