use serde::{Deserialize, Serialize};
use valuable::Valuable;

use crate::{documents::GameEntry, log_event, logging::LogEvent};

#[derive(Serialize, Deserialize, Valuable, Default, Clone, Debug)]
pub struct PickEvent {
    index: usize,
    catalog_size: usize,
    name: String,
    url: String,
}

impl PickEvent {
    pub fn log(index: usize, catalog_size: usize, game: &GameEntry) {
        log_event!(LogEvent::Pick(PickEvent {
            index,
            catalog_size,
            name: game.name().to_owned(),
            url: game.url().to_owned(),
        }));
    }
}
