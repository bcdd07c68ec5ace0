// Service exports
pub mod loader;

pub use loader::{Dataset, DataPaths, LoaderError, SchemaError, read_sales, read_suburb_coords};
