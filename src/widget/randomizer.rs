use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::{info, instrument};

use super::{DisplayState, WidgetState};
use crate::{documents::GameEntry, loader, schema::CsvSchema};

/// A randomizer widget bound to one CSV source.
///
/// Loads are serialized: a second `load()` waits for the one in flight
/// before reading the file again.
pub struct GameRandomizer {
    source: PathBuf,
    schema: CsvSchema,
    state: Mutex<WidgetState>,
    load_lock: Mutex<()>,
}

impl GameRandomizer {
    pub fn new(source: impl Into<PathBuf>, schema: CsvSchema) -> Self {
        GameRandomizer {
            source: source.into(),
            schema,
            state: Mutex::new(WidgetState::Loading),
            load_lock: Mutex::new(()),
        }
    }

    /// (Re)loads the catalog and returns the number of games available.
    #[instrument(
        name = "randomizer::load",
        level = "trace",
        skip(self),
        fields(source = %self.source.display()),
    )]
    pub async fn load(&self) -> usize {
        let _guard = self.load_lock.lock().await;
        *self.state.lock().await = WidgetState::Loading;

        let catalog = loader::load(&self.source, &self.schema).await;
        let size = catalog.len();

        let mut state = self.state.lock().await;
        *state = std::mem::take(&mut *state).loaded(catalog);
        size
    }

    /// Selects a random game. Returns `None` while loading or when the
    /// catalog is empty.
    pub async fn pick_random_game(&self) -> Option<GameEntry> {
        let mut state = self.state.lock().await;
        *state = std::mem::take(&mut *state).pick_random_game(&mut rand::thread_rng());

        let selected = state.selected_game().cloned();
        if let Some(game) = &selected {
            info!("Picked {game}");
        }
        selected
    }

    pub async fn view(&self) -> DisplayState {
        self.state.lock().await.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::HeuristicColumns;
    use std::{fs::File, io::Write};
    use tempdir::TempDir;

    const CSV: &str = "\
name,href,username,timestamp
Chess,https://store.steampowered.com/app/1,alice,2021-01-01
Go,https://www.gog.com/game/go,bob,2021-01-02
Hades,,carol,2021-01-03
";

    fn write_csv(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("games.csv");
        File::create(&path)
            .unwrap()
            .write_all(text.as_bytes())
            .unwrap();
        path
    }

    fn heuristic() -> CsvSchema {
        CsvSchema::Heuristic(HeuristicColumns::default())
    }

    #[tokio::test]
    async fn starts_loading() {
        let randomizer = GameRandomizer::new("games.csv", CsvSchema::default());
        assert!(randomizer.view().await.loading);
        assert_eq!(randomizer.pick_random_game().await, None);
    }

    #[tokio::test]
    async fn load_then_pick() {
        let dir = TempDir::new("randomizer").unwrap();
        let randomizer = GameRandomizer::new(write_csv(&dir, CSV), heuristic());

        assert_eq!(randomizer.load().await, 2);
        let view = randomizer.view().await;
        assert!(!view.loading);
        assert!(view.can_pick);
        assert_eq!(view.selected_game, None);

        let game = randomizer.pick_random_game().await.unwrap();
        assert!(["Chess", "Go"].contains(&game.name()));
        assert_eq!(randomizer.view().await.selected_game, Some(game));
    }

    #[tokio::test]
    async fn failed_load_is_ready_and_empty() {
        let dir = TempDir::new("randomizer").unwrap();
        let randomizer = GameRandomizer::new(dir.path().join("missing.csv"), heuristic());

        assert_eq!(randomizer.load().await, 0);
        let view = randomizer.view().await;
        assert!(!view.loading);
        assert!(!view.can_pick);
        assert_eq!(randomizer.pick_random_game().await, None);
    }

    #[tokio::test]
    async fn concurrent_loads() {
        let dir = TempDir::new("randomizer").unwrap();
        let randomizer = GameRandomizer::new(write_csv(&dir, CSV), heuristic());

        let (first, second) = tokio::join!(randomizer.load(), randomizer.load());
        assert_eq!((first, second), (2, 2));
        assert_eq!(randomizer.view().await.games.len(), 2);
    }
}
