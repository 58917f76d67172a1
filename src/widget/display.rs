use serde::Serialize;

use crate::{
    documents::{Catalog, GameEntry},
    Status,
};

/// Snapshot of the widget handed to the presentation layer.
#[derive(Serialize, Default, Clone, PartialEq, Debug)]
pub struct DisplayState {
    pub games: Catalog,
    pub loading: bool,

    /// `null` until a game is picked.
    pub selected_game: Option<GameEntry>,

    /// Whether the pick action is enabled.
    pub can_pick: bool,
}

impl DisplayState {
    /// Single line JSON document of the display contract.
    pub fn to_json(&self) -> Result<String, Status> {
        Ok(serde_json::to_string(self)?)
    }

    /// Plain text rendering of the widget.
    pub fn render(&self) -> String {
        if self.loading {
            return "Loading games...".to_owned();
        }
        if self.games.is_empty() {
            return "No games available".to_owned();
        }

        match &self.selected_game {
            Some(game) => format!(
                "{}\nView on {}: {}\nSuggested by: {}\nDate: {}",
                game.name(),
                game.storefront(),
                game.url(),
                game.username(),
                game.timestamp(),
            ),
            None => format!("{} games available", self.games.len()),
        }
    }
}
