//! Respawn site selection.

use rand::seq::SliceRandom;
use rand::Rng;

use tankarena_core::types::TileCoord;

/// Shuffle `sites` and return the first one `is_open` accepts, or `None`
/// if every site is rejected. Callers decide what "open" means (floor tile,
/// footprint clear of live tanks).
pub fn pick_site<R, F>(sites: &[TileCoord], rng: &mut R, mut is_open: F) -> Option<TileCoord>
where
    R: Rng + ?Sized,
    F: FnMut(TileCoord) -> bool,
{
    let mut shuffled = sites.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().find(|&site| is_open(site))
}
