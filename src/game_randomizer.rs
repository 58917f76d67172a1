use clap::Parser;
use game_randomizer::{
    schema::CsvSchema,
    widget::{DisplayState, GameRandomizer},
    Status, Tracing,
};

/// Picks a random game from a CSV export of game suggestions.
#[derive(Parser)]
struct Opts {
    /// CSV export with a header row.
    #[clap(long, default_value = "MTP Game Database.csv")]
    csv: String,

    /// JSON file describing the CSV columns. Defaults to the export tool's
    /// fixed column names.
    #[clap(long)]
    schema: Option<String>,

    /// Number of independent picks.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    picks: u32,

    /// Print the widget state as JSON, one document per line, instead of
    /// text. Logs go to stderr.
    #[clap(long)]
    json: bool,

    #[clap(long)]
    prod_tracing: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let opts: Opts = Opts::parse();

    match opts.prod_tracing {
        false => Tracing::setup("game_randomizer")?,
        true => Tracing::setup_prod("game_randomizer")?,
    }

    let schema = match &opts.schema {
        Some(path) => CsvSchema::from_file(path)?,
        None => CsvSchema::default(),
    };

    let randomizer = GameRandomizer::new(&opts.csv, schema);
    randomizer.load().await;

    let view = randomizer.view().await;
    if !view.can_pick {
        print(&view, opts.json)?;
        return Ok(());
    }

    for _ in 0..opts.picks {
        randomizer.pick_random_game().await;
        print(&randomizer.view().await, opts.json)?;
    }

    Ok(())
}

fn print(view: &DisplayState, json: bool) -> Result<(), Status> {
    match json {
        true => println!("{}", view.to_json()?),
        false => println!("{}\n", view.render()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Opts::try_parse_from(["game_randomizer"]).unwrap();
        assert_eq!(opts.csv, "MTP Game Database.csv");
        assert_eq!(opts.picks, 1);
        assert!(!opts.json);
    }

    #[test]
    fn zero_picks_is_rejected() {
        assert!(Opts::try_parse_from(["game_randomizer", "--picks", "0"]).is_err());
        let opts = Opts::try_parse_from(["game_randomizer", "--picks", "3"]).unwrap();
        assert_eq!(opts.picks, 3);
    }
}
