//! The array being sorted.
//!
//! [`ArrayModel`] owns the bar heights. The sort engine mutates it only through
//! [`ArrayModel::swap`] and [`ArrayModel::set`].

use rand::Rng;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayModel {
    values: Vec<u32>,
}

impl ArrayModel {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Replaces the contents with `size` values drawn uniformly from `[1, max_value]`.
    pub fn randomize(&mut self, size: usize, max_value: u32) {
        self.randomize_with(&mut rand::thread_rng(), size, max_value);
    }

    /// Same as [`randomize`](Self::randomize), with a caller-supplied generator.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, size: usize, max_value: u32) {
        let max_value = max_value.max(1);
        self.values = (0..size).map(|_| rng.gen_range(1..=max_value)).collect();
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: u32) {
        self.values[i] = value;
    }

    #[inline]
    pub fn get(&self, i: usize) -> u32 {
        self.values[i]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn randomize_respects_size_and_range() {
        let mut array = ArrayModel::default();
        let mut rng = StdRng::seed_from_u64(7);
        array.randomize_with(&mut rng, 150, 500);

        assert_eq!(array.len(), 150);
        assert!(array.values().iter().all(|&v| (1..=500).contains(&v)));
    }

    #[test]
    fn randomize_replaces_previous_contents() {
        let mut array = ArrayModel::new(vec![1, 2, 3]);
        array.randomize(10, 5);
        assert_eq!(array.len(), 10);

        array.randomize(0, 5);
        assert!(array.is_empty());
    }

    #[test]
    fn seeded_randomize_is_reproducible() {
        let mut a = ArrayModel::default();
        let mut b = ArrayModel::default();
        a.randomize_with(&mut StdRng::seed_from_u64(42), 32, 500);
        b.randomize_with(&mut StdRng::seed_from_u64(42), 32, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn swap_and_set() {
        let mut array = ArrayModel::new(vec![4, 8, 15]);
        array.swap(0, 2);
        assert_eq!(array.values(), &[15, 8, 4]);

        array.set(1, 16);
        assert_eq!(array.get(1), 16);
    }
}
