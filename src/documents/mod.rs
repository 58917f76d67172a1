mod catalog;
mod game_entry;

pub use catalog::Catalog;
pub use game_entry::*;
