//! Fisher–Yates shuffling of answer options.

use rand::Rng;
use rand::seq::SliceRandom;

/// Return `items` in a uniformly random order using the thread-local RNG.
#[must_use]
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Return `items` in a uniformly random order drawn from `rng`.
#[must_use]
pub fn shuffle_with<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.as_mut_slice().shuffle(rng);
    items
}
