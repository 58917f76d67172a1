use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::ColumnRule;
use crate::Status;

/// Describes the CSV dialect of the export tool that produced the games
/// database, i.e. where each `GameEntry` field is found.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum CsvSchema {
    /// Fields are read from known column names.
    Fixed(FixedColumns),

    /// The url column is discovered per row among candidate columns.
    Heuristic(HeuristicColumns),
}

impl Default for CsvSchema {
    fn default() -> Self {
        CsvSchema::Fixed(FixedColumns::default())
    }
}

impl CsvSchema {
    /// Reads a schema from a JSON file. Fields missing from the file keep
    /// their default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Status> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let schema: CsvSchema = serde_json::from_reader(reader)?;
        schema.validate()?;

        info!("Loaded {} csv schema from {}", schema.variant(), path.display());
        Ok(schema)
    }

    pub fn variant(&self) -> &'static str {
        match self {
            CsvSchema::Fixed(_) => "fixed",
            CsvSchema::Heuristic(_) => "heuristic",
        }
    }

    pub fn validate(&self) -> Result<(), Status> {
        match self {
            CsvSchema::Fixed(columns) => {
                if columns.name.trim().is_empty() || columns.url.trim().is_empty() {
                    return Err(Status::invalid_argument(
                        "fixed schema requires name and url columns",
                    ));
                }
            }
            CsvSchema::Heuristic(columns) => {
                if columns.url.is_empty() {
                    return Err(Status::invalid_argument(
                        "heuristic schema requires at least one url rule",
                    ));
                }
                if columns.storefronts.iter().all(|d| d.trim().is_empty()) {
                    return Err(Status::invalid_argument(
                        "heuristic schema requires at least one storefront domain",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct FixedColumns {
    pub name: String,
    pub url: String,
    pub username: String,
    pub timestamp: String,

    /// Rows whose name is missing or equal to this value are skipped.
    pub placeholder_name: String,
}

impl Default for FixedColumns {
    fn default() -> Self {
        FixedColumns {
            name: "anchor_af404b (3)".to_owned(),
            url: "anchor_af404b href".to_owned(),
            username: "username_f9f2ca".to_owned(),
            timestamp: "timestamp_f9f2ca".to_owned(),
            placeholder_name: "Unknown Game".to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct HeuristicColumns {
    /// Candidate url columns. The first one whose value links to a known
    /// storefront is used.
    pub url: Vec<ColumnRule>,

    /// Markup column holding the display name.
    pub name: Vec<ColumnRule>,
    pub username: Vec<ColumnRule>,
    pub timestamp: Vec<ColumnRule>,

    /// Domains accepted as storefront links.
    pub storefronts: Vec<String>,
}

impl HeuristicColumns {
    pub fn is_storefront_url(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.storefronts
            .iter()
            .map(|domain| domain.trim())
            .any(|domain| !domain.is_empty() && value.contains(&domain.to_lowercase()))
    }
}

impl Default for HeuristicColumns {
    fn default() -> Self {
        HeuristicColumns {
            url: vec![ColumnRule::contains("href")],
            name: vec![
                ColumnRule::exact("name"),
                ColumnRule::exact("markup"),
                ColumnRule::suffix("(3)"),
            ],
            username: vec![ColumnRule::exact("username"), ColumnRule::prefix("username")],
            timestamp: vec![
                ColumnRule::exact("timestamp"),
                ColumnRule::prefix("timestamp"),
            ],
            storefronts: STOREFRONT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

const STOREFRONT_DOMAINS: &[&str] = &[
    "store.steampowered.com",
    "steamcommunity.com",
    "gog.com",
    "epicgames.com",
    "itch.io",
    "humblebundle.com",
];
