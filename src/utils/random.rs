#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::UnsafeCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half open interval [min, max).
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Spins a roulette wheel over non-negative weights and returns the selected index.
    /// Falls back to a uniform choice when all weights are zero.
    fn weighted(&self, weights: &[Float]) -> usize;
}

/// A default random implementation backed by a seedable small rng.
pub struct DefaultRandom {
    rng: UnsafeCell<SmallRng>,
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: UnsafeCell::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG")) }
    }
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: UnsafeCell::new(SmallRng::seed_from_u64(seed)) }
    }

    #[allow(clippy::mut_from_ref)]
    fn rng(&self) -> &mut SmallRng {
        // SAFETY: the type is not Sync, so the cell is never observed from two threads.
        unsafe { &mut *self.rng.get() }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.rng().gen_bool(probability.clamp(0., 1.))
    }

    fn weighted(&self, weights: &[Float]) -> usize {
        debug_assert!(!weights.is_empty());

        let sum: Float = weights.iter().sum();
        if sum <= 0. {
            return self.uniform_int(0, weights.len() as i32 - 1) as usize;
        }

        let threshold = self.uniform_real(0., sum);
        let mut accumulated = 0.;
        for (index, weight) in weights.iter().enumerate() {
            accumulated += weight;
            if threshold < accumulated {
                return index;
            }
        }

        weights.len() - 1
    }
}
