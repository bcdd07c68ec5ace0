use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::{aggregate::localities, boundary::{trim_boundaries, FeatureCollection}};
use crate::models::{SaleRecord, SuburbCoord};

/// Columns the sales table must provide
pub const SALES_COLUMNS: [&str; 5] = ["locality", "property_type", "year", "price", "bedrooms"];

/// Keys every suburb coordinate entry must provide
pub const COORD_COLUMNS: [&str; 3] = ["locality", "lat", "lon"];

/// An input table is missing a required column
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required column `{column}` in {table}")]
pub struct SchemaError {
    pub column: String,
    pub table: String,
}

/// Errors that can occur while loading the input tables
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
}

/// Paths of the three input files
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub sales: PathBuf,
    pub suburb_coords: PathBuf,
    pub boundaries: PathBuf,
}

/// The raw tables, loaded once and shared read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub sales: Vec<SaleRecord>,
    pub suburbs: Vec<SuburbCoord>,
    /// Locality boundaries, already reduced to the localities with sales
    pub boundaries: FeatureCollection,
}

impl Dataset {
    /// Load every input table from disk
    pub fn load(paths: &DataPaths, id_property: &str) -> Result<Self, LoaderError> {
        let sales = read_sales(open(&paths.sales)?)?;
        tracing::info!("Loaded {} sales from {}", sales.len(), paths.sales.display());

        let suburbs = read_suburb_coords(open(&paths.suburb_coords)?)?;
        tracing::info!("Loaded {} suburb coordinates", suburbs.len());

        let boundaries: FeatureCollection = serde_json::from_reader(open(&paths.boundaries)?)?;

        Ok(Self::from_parts(sales, suburbs, boundaries, id_property))
    }

    /// Assemble a dataset from already parsed tables
    pub fn from_parts(
        sales: Vec<SaleRecord>,
        suburbs: Vec<SuburbCoord>,
        boundaries: FeatureCollection,
        id_property: &str,
    ) -> Self {
        let total = boundaries.len();
        let boundaries = trim_boundaries(&boundaries, localities(&sales), id_property);

        tracing::info!(
            "Kept {} of {} locality boundaries with sales",
            boundaries.len(),
            total
        );

        Self {
            sales,
            suburbs,
            boundaries,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LoaderError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoaderError::Io {
            path: path.display().to_string(),
            source,
        })
}

fn check_columns(headers: &StringRecord, required: &[&str], table: &str) -> Result<(), SchemaError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SchemaError {
                column: column.to_string(),
                table: table.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse the sales table
///
/// Extra columns are ignored. A missing required column is a `SchemaError`;
/// a non-positive price is rejected since prices are log-transformed later.
pub fn read_sales<R: Read>(reader: R) -> Result<Vec<SaleRecord>, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    check_columns(&headers, &SALES_COLUMNS, "sales")?;

    let mut sales = Vec::new();
    for (idx, result) in reader.deserialize::<SaleRecord>().enumerate() {
        let record = result?;
        if !(record.price > 0.0) {
            return Err(LoaderError::InvalidRecord {
                row: idx + 1,
                reason: format!("price must be positive, got {}", record.price),
            });
        }
        sales.push(record);
    }

    Ok(sales)
}

/// Parse the suburb coordinate table (a JSON array of objects)
pub fn read_suburb_coords<R: Read>(reader: R) -> Result<Vec<SuburbCoord>, LoaderError> {
    let entries: Vec<Value> = serde_json::from_reader(reader)?;

    entries
        .into_iter()
        .map(|entry| -> Result<SuburbCoord, LoaderError> {
            for column in COORD_COLUMNS {
                let present = match column {
                    "lat" => entry.get("lat").or_else(|| entry.get("latitude")).is_some(),
                    "lon" => entry.get("lon").or_else(|| entry.get("longitude")).is_some(),
                    _ => entry.get(column).is_some(),
                };
                if !present {
                    return Err(SchemaError {
                        column: column.to_string(),
                        table: "suburb coordinates".to_string(),
                    }
                    .into());
                }
            }
            Ok(serde_json::from_value(entry)?)
        })
        .collect()
}
