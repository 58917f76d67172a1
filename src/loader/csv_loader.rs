use std::path::Path;

use tracing::{error, info, instrument};

use super::Extraction;
use crate::{
    documents::Catalog,
    logging::{LoadEvent, LoaderCounters, RejectEvent},
    schema::CsvSchema,
    Status,
};

/// Loads the games catalog from the CSV file at `path`.
///
/// Read and parse failures are logged and produce an empty catalog.
pub async fn load(path: impl AsRef<Path>, schema: &CsvSchema) -> Catalog {
    let path = path.as_ref();
    match try_load(path, schema).await {
        Ok(catalog) => catalog,
        Err(status) => {
            error!("Error loading games from '{}': {status}", path.display());
            Catalog::default()
        }
    }
}

/// Same as `load` but surfaces the failure to the caller.
#[instrument(
    name = "loader::try_load",
    level = "trace",
    skip(path, schema),
    fields(path = %path.as_ref().display()),
)]
pub async fn try_load(path: impl AsRef<Path>, schema: &CsvSchema) -> Result<Catalog, Status> {
    let source = path.as_ref();
    let path = source.display().to_string();
    let event = LoadEvent::new(&path, schema.variant());

    let table = match read(source).await {
        Ok(table) => table,
        Err(status) => {
            LoaderCounters::catalog_load_fail(&path, &status);
            event.log_error(&status);
            return Err(status);
        }
    };

    let catalog = extract(&table, schema);
    info!(
        "Loaded {} games out of {} rows from '{path}'",
        catalog.len(),
        table.records.len()
    );
    LoaderCounters::catalog_loaded(&path, catalog.len());
    event.log(table.records.len(), catalog.len());

    Ok(catalog)
}

/// Parses CSV `text` into a catalog using `schema`.
pub fn parse(text: &str, schema: &CsvSchema) -> Result<Catalog, Status> {
    let table = CsvTable::parse(text)?;
    Ok(extract(&table, schema))
}

async fn read(path: &Path) -> Result<CsvTable, Status> {
    let text = tokio::fs::read_to_string(path).await?;
    CsvTable::parse(&text)
}

fn extract(table: &CsvTable, schema: &CsvSchema) -> Catalog {
    let extraction = Extraction::new(schema, &table.headers);
    table
        .records
        .iter()
        .filter_map(|record| match extraction.extract(record) {
            Ok(game) => Some(game),
            Err(reason) => {
                RejectEvent::log(record.row(), reason);
                LoaderCounters::row_rejected(record.row(), reason);
                None
            }
        })
        .collect()
}

/// Header row and data rows of a CSV document.
#[derive(Default, Clone, Debug)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<CsvRecord>,
}

impl CsvTable {
    /// Empty lines are skipped. Rows may be shorter or longer than the
    /// header; missing fields are absent and extra fields are dropped.
    pub fn parse(text: &str) -> Result<Self, Status> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_owned())
            .collect();

        let mut records = vec![];
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            records.push(CsvRecord {
                row: i + 1,
                fields: headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, value)| (header.clone(), value.to_owned()))
                    .collect(),
            });
        }

        Ok(CsvTable { headers, records })
    }
}

/// One data row mapped from column header to value, in header order.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct CsvRecord {
    row: usize,
    fields: Vec<(String, String)>,
}

impl CsvRecord {
    /// 1-based position among the data rows.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Value of the column at `index` in the header row.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(_, value)| value.as_str())
    }
}
