use serde::Serialize;

use super::GameEntry;

/// Ordered collection of game entries produced by one load. Order follows
/// the rows of the source CSV.
#[derive(Serialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(transparent)]
pub struct Catalog {
    games: Vec<GameEntry>,
}

impl Catalog {
    pub fn new(games: Vec<GameEntry>) -> Self {
        Catalog { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameEntry> {
        self.games.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameEntry> {
        self.games.iter()
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.games
    }
}

impl FromIterator<GameEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = GameEntry>>(iter: I) -> Self {
        Catalog {
            games: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GameEntry;
    type IntoIter = std::slice::Iter<'a, GameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}
