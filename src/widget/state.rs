use std::sync::Arc;

use rand::Rng;

use super::DisplayState;
use crate::{
    documents::{Catalog, GameEntry},
    picker,
};

/// State of one randomizer widget. Transitions consume the current state
/// and return the next one.
#[derive(Default, Clone, PartialEq, Debug)]
pub enum WidgetState {
    #[default]
    Loading,

    Ready {
        games: Arc<Catalog>,
    },

    Selected {
        games: Arc<Catalog>,
        selected: GameEntry,
    },
}

impl WidgetState {
    /// A finished load, successful or not, always lands in `Ready`. Loading
    /// again drops the previous selection.
    pub fn loaded(self, catalog: Catalog) -> Self {
        WidgetState::Ready {
            games: Arc::new(catalog),
        }
    }

    /// Selects a random game. No-op while loading or when no games are
    /// available.
    pub fn pick_random_game<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        match self {
            WidgetState::Ready { games } | WidgetState::Selected { games, .. } => {
                let selected = picker::pick_with(&games, rng).cloned();
                match selected {
                    Some(selected) => WidgetState::Selected { games, selected },
                    None => WidgetState::Ready { games },
                }
            }
            WidgetState::Loading => WidgetState::Loading,
        }
    }

    pub fn games(&self) -> Option<&Catalog> {
        match self {
            WidgetState::Loading => None,
            WidgetState::Ready { games } | WidgetState::Selected { games, .. } => {
                Some(games.as_ref())
            }
        }
    }

    pub fn selected_game(&self) -> Option<&GameEntry> {
        match self {
            WidgetState::Selected { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn view(&self) -> DisplayState {
        DisplayState {
            games: self.games().cloned().unwrap_or_default(),
            loading: self.is_loading(),
            selected_game: self.selected_game().cloned(),
            can_pick: self.games().is_some_and(|games| !games.is_empty()),
        }
    }
}
