use serde::{Deserialize, Serialize};
use valuable::Valuable;

use crate::{log_event, logging::LogEvent, Status};

#[derive(Serialize, Deserialize, Valuable, Default, Clone, Debug)]
pub struct LoadEvent {
    path: String,
    schema: String,
    rows: usize,
    games: usize,
    error: Option<String>,
}

impl LoadEvent {
    pub fn new(path: &str, schema: &str) -> Self {
        LoadEvent {
            path: path.to_owned(),
            schema: schema.to_owned(),
            ..Default::default()
        }
    }

    pub fn log(mut self, rows: usize, games: usize) {
        self.rows = rows;
        self.games = games;
        log_event!(LogEvent::Load(self));
    }

    pub fn log_error(mut self, status: &Status) {
        self.error = Some(status.to_string());
        log_event!(LogEvent::Load(self));
    }
}
