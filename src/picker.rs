use rand::Rng;

use crate::{
    documents::{Catalog, GameEntry},
    logging::PickEvent,
};

/// Picks a game uniformly at random. Returns `None` for an empty catalog.
pub fn pick(catalog: &Catalog) -> Option<&GameEntry> {
    pick_with(catalog, &mut rand::thread_rng())
}

/// Same as `pick` drawing from `rng`. Every call is independent, the same
/// game can come up again.
pub fn pick_with<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> Option<&'a GameEntry> {
    if catalog.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..catalog.len());
    let game = catalog.get(index)?;
    PickEvent::log(index, catalog.len(), game);
    Some(game)
}
