use super::{CsvRecord, FieldNormalizer};
use crate::{
    documents::GameEntry,
    logging::RejectReason,
    schema::{ColumnRule, CsvSchema, FixedColumns, HeuristicColumns},
};

/// Column positions of a schema resolved against one header row.
#[derive(Debug)]
pub enum Extraction<'a> {
    Fixed {
        columns: &'a FixedColumns,
        name: Option<usize>,
        url: Option<usize>,
        username: Option<usize>,
        timestamp: Option<usize>,
    },
    Heuristic {
        columns: &'a HeuristicColumns,
        urls: Vec<usize>,
        name: Option<usize>,
        username: Option<usize>,
        timestamp: Option<usize>,
    },
}

impl<'a> Extraction<'a> {
    pub fn new<S: AsRef<str>>(schema: &'a CsvSchema, headers: &[S]) -> Self {
        match schema {
            CsvSchema::Fixed(columns) => {
                let column = |name: &str| ColumnRule::resolve(&[ColumnRule::exact(name)], headers);
                Extraction::Fixed {
                    columns,
                    name: column(&columns.name),
                    url: column(&columns.url),
                    username: column(&columns.username),
                    timestamp: column(&columns.timestamp),
                }
            }
            CsvSchema::Heuristic(columns) => Extraction::Heuristic {
                columns,
                urls: ColumnRule::resolve_all(&columns.url, headers),
                name: ColumnRule::resolve(&columns.name, headers),
                username: ColumnRule::resolve(&columns.username, headers),
                timestamp: ColumnRule::resolve(&columns.timestamp, headers),
            },
        }
    }

    /// Builds the `GameEntry` of `record` or explains why the row is skipped.
    pub fn extract(&self, record: &CsvRecord) -> Result<GameEntry, RejectReason> {
        match self {
            Extraction::Fixed {
                columns,
                name,
                url,
                username,
                timestamp,
            } => {
                let url = field(record, *url).ok_or(RejectReason::MissingUrl)?;
                let name = field(record, *name).unwrap_or(columns.placeholder_name.as_str());
                if name == columns.placeholder_name {
                    return Err(RejectReason::PlaceholderName);
                }

                GameEntry::new(
                    name,
                    url,
                    field(record, *username),
                    field(record, *timestamp).map(FieldNormalizer::timestamp),
                )
                .ok_or(RejectReason::MissingName)
            }
            Extraction::Heuristic {
                columns,
                urls,
                name,
                username,
                timestamp,
            } => {
                let candidates: Vec<&str> = urls
                    .iter()
                    .filter_map(|index| field(record, Some(*index)))
                    .collect();
                if candidates.is_empty() {
                    return Err(RejectReason::MissingUrl);
                }
                let url = candidates
                    .into_iter()
                    .find(|value| columns.is_storefront_url(value))
                    .ok_or(RejectReason::NoStorefrontUrl)?;

                let markup = field(record, *name)
                    .map(FieldNormalizer::markup_name)
                    .filter(|name| !name.is_empty() && !FieldNormalizer::looks_like_url(name));
                let name = match markup {
                    Some(name) => name,
                    None => FieldNormalizer::name_from_url(url).ok_or(RejectReason::MissingName)?,
                };

                GameEntry::new(
                    name,
                    url,
                    field(record, *username),
                    field(record, *timestamp).map(FieldNormalizer::timestamp),
                )
                .ok_or(RejectReason::MissingName)
            }
        }
    }
}

/// Trimmed non-empty value of the column at `index`.
fn field(record: &CsvRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|index| record.value(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CsvTable;

    fn extract_all(schema: &CsvSchema, csv: &str) -> Vec<Result<GameEntry, RejectReason>> {
        let table = CsvTable::parse(csv).unwrap();
        let extraction = Extraction::new(schema, &table.headers);
        table
            .records
            .iter()
            .map(|record| extraction.extract(record))
            .collect()
    }

    #[test]
    fn fixed_reject_reasons() {
        let schema = CsvSchema::Fixed(FixedColumns {
            name: "title".to_owned(),
            url: "link".to_owned(),
            ..Default::default()
        });
        let results = extract_all(
            &schema,
            "title,link\nUnknown Game,https://gog.com/game/a\n,https://gog.com/game/b\nHades,\n",
        );

        assert_eq!(
            results,
            vec![
                Err(RejectReason::PlaceholderName),
                Err(RejectReason::PlaceholderName),
                Err(RejectReason::MissingUrl),
            ]
        );
    }

    #[test]
    fn fixed_missing_columns() {
        let results = extract_all(&CsvSchema::default(), "title,link\nHades,https://gog.com\n");
        assert_eq!(results, vec![Err(RejectReason::MissingUrl)]);
    }

    #[test]
    fn fixed_does_not_require_storefront_domain() {
        let schema = CsvSchema::Fixed(FixedColumns {
            name: "title".to_owned(),
            url: "link".to_owned(),
            ..Default::default()
        });
        let results = extract_all(&schema, "title,link\nHades,https://example.com/hades\n");
        assert_eq!(results[0].as_ref().unwrap().url(), "https://example.com/hades");
    }

    #[test]
    fn heuristic_scans_href_columns() {
        let csv = "\
image href,name,store href,username
https://cdn.example.com/a.png,Hades,https://store.steampowered.com/app/1145360/Hades/,zagreus
https://cdn.example.com/b.png,Hades,https://cdn.example.com/c,zagreus
,Hades,,zagreus
";
        let results = extract_all(&CsvSchema::Heuristic(HeuristicColumns::default()), csv);

        let hades = results[0].as_ref().unwrap();
        assert_eq!(hades.url(), "https://store.steampowered.com/app/1145360/Hades/");
        assert_eq!(hades.username(), "zagreus");
        assert_eq!(hades.timestamp(), "Unknown Date");

        assert_eq!(results[1], Err(RejectReason::NoStorefrontUrl));
        assert_eq!(results[2], Err(RejectReason::MissingUrl));
    }

    #[test]
    fn heuristic_name_fallback_when_markup_is_a_url() {
        let csv = "name,href\nhttps://store.steampowered.com,https://store.steampowered.com/app/70/Half_Life/\n";
        let results = extract_all(&CsvSchema::Heuristic(HeuristicColumns::default()), csv);
        assert_eq!(results[0].as_ref().unwrap().name(), "Half Life");
    }

    #[test]
    fn heuristic_without_markup_column() {
        let csv = "href,timestamp\nhttps://www.gog.com/en/game/disco-elysium,\"— \n2020-03-30\"\n";
        let results = extract_all(&CsvSchema::Heuristic(HeuristicColumns::default()), csv);

        let game = results[0].as_ref().unwrap();
        assert_eq!(game.name(), "disco elysium");
        assert_eq!(game.timestamp(), "2020-03-30");
    }

    #[test]
    fn heuristic_without_url_columns() {
        let csv = "name,link,username\nChess,https://store.steampowered.com/app/1,alice\n";
        let results = extract_all(&CsvSchema::Heuristic(HeuristicColumns::default()), csv);
        assert_eq!(results, vec![Err(RejectReason::MissingUrl)]);
    }

    #[test]
    fn heuristic_pathless_url_without_markup() {
        let csv = "name,href\n,https://store.steampowered.com/\n";
        let results = extract_all(&CsvSchema::Heuristic(HeuristicColumns::default()), csv);
        assert_eq!(results, vec![Err(RejectReason::MissingName)]);
    }
}
