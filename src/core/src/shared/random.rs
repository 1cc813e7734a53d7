use rand::rngs::{StdRng, ThreadRng};
use rand::{RngExt, SeedableRng};

/// Source of randomness for the stochastic engines (mid-season progression,
/// breakout, concrete play-call selection). Everything else in the crate is a
/// pure function of its inputs and never takes one of these.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_f32(&mut self) -> f32;

    /// Uniform value in `[min, max)`; returns `min` for an empty range
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }

        min + self.next_f32() * (max - min)
    }

    /// Uniform index in `[0, len)`; `len` must be non-zero
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }

    /// Picks `count` distinct items, order of the draw preserved
    fn pick_distinct<T: Copy>(&mut self, items: &[T], count: usize) -> Vec<T>
    where
        Self: Sized,
    {
        let mut pool: Vec<T> = items.to_vec();
        let mut picked = Vec::with_capacity(count.min(pool.len()));

        while picked.len() < count && !pool.is_empty() {
            let idx = self.index(pool.len());
            picked.push(pool.swap_remove(idx));
        }

        picked
    }
}

/// Deterministic source for replays and tests
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.random_range(0.0..1.0)
    }
}

/// Thread-local generator for live simulation
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        ThreadRandom { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.random_range(0.0..1.0)
    }
}

/// Replays a fixed list of draws, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[f32]) -> Self {
        ScriptedRandom {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_deterministic() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        let first: Vec<f32> = (0..16).map(|_| a.next_f32()).collect();
        let second: Vec<f32> = (0..16).map(|_| b.next_f32()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_thread_random_stays_in_unit_interval() {
        let mut rng = ThreadRandom::default();

        for _ in 0..1000 {
            let value = rng.next_f32();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_range_stays_inside_bounds() {
        let mut rng = SeededRandom::new(7);

        for _ in 0..1000 {
            let value = rng.range_f32(0.5, 1.5);
            assert!((0.5..=1.5).contains(&value));
        }
    }

    #[test]
    fn test_index_handles_small_lengths() {
        let mut rng = SeededRandom::new(3);

        assert_eq!(rng.index(0), 0);
        assert_eq!(rng.index(1), 0);

        for _ in 0..200 {
            assert!(rng.index(3) < 3);
        }
    }

    #[test]
    fn test_pick_distinct_never_repeats() {
        let mut rng = SeededRandom::new(11);
        let items = [1, 2, 3, 4, 5];

        for _ in 0..100 {
            let mut picked = rng.pick_distinct(&items, 3);
            picked.sort();
            picked.dedup();
            assert_eq!(picked.len(), 3);
        }

        assert_eq!(rng.pick_distinct(&items, 10).len(), 5);
    }

    #[test]
    fn test_scripted_random_maps_ranges() {
        let mut rng = ScriptedRandom::new(&[0.0, 0.5, 0.999]);

        assert_eq!(rng.range_f32(10.0, 20.0), 10.0);
        assert_eq!(rng.range_f32(10.0, 20.0), 15.0);
        assert_eq!(rng.index(4), 3);
    }
}
