//! Neighbor proposals for continuous and combinatorial states.

use rand::Rng;

use super::config::Bounds;

/// Perturbs every coordinate by `(u - 0.5) * damping`, `u ~ U[0, 1)`,
/// then clips each coordinate into its bounds when any are given.
///
/// `bounds` is either empty or has one entry per coordinate.
pub fn perturb<R: Rng>(state: &[f64], damping: f64, bounds: &[Bounds], rng: &mut R) -> Vec<f64> {
    let mut neighbor: Vec<f64> = state
        .iter()
        .map(|x| x + (rng.random::<f64>() - 0.5) * damping)
        .collect();

    if !bounds.is_empty() {
        for (x, b) in neighbor.iter_mut().zip(bounds) {
            *x = b.clip(*x);
        }
    }
    neighbor
}

/// Swaps two positions drawn independently and uniformly.
///
/// Both positions may coincide, in which case the neighbor equals `state`.
pub fn swap<T: Clone, R: Rng>(state: &[T], rng: &mut R) -> Vec<T> {
    let mut neighbor = state.to_vec();
    if neighbor.is_empty() {
        return neighbor;
    }
    let p0 = rng.random_range(0..neighbor.len());
    let p1 = rng.random_range(0..neighbor.len());
    neighbor.swap(p0, p1);
    neighbor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_perturb_stays_within_half_damping() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = vec![1.0, -2.0, 3.5];
        for _ in 0..1000 {
            let n = perturb(&state, 0.2, &[], &mut rng);
            assert_eq!(n.len(), state.len());
            for (a, b) in n.iter().zip(&state) {
                assert!((a - b).abs() <= 0.1 + 1e-12);
            }
        }
    }

    #[test]
    fn test_perturb_zero_damping_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = vec![0.25, 0.5];
        assert_eq!(perturb(&state, 0.0, &[], &mut rng), state);
    }

    #[test]
    fn test_perturb_clips_into_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = vec![Bounds::new(0.0, 0.0), Bounds::new(-1.0, 1.0)];
        let state = vec![0.0, 1.0];
        for _ in 0..500 {
            let n = perturb(&state, 10.0, &bounds, &mut rng);
            assert_eq!(n[0], 0.0);
            assert!(bounds[1].contains(n[1]));
        }
    }

    #[test]
    fn test_swap_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = vec!['a', 'b', 'b', 'c', 'd'];
        let mut sorted = state.clone();
        sorted.sort_unstable();
        for _ in 0..500 {
            let mut n = swap(&state, &mut rng);
            let differing = n.iter().zip(&state).filter(|(x, y)| x != y).count();
            assert!(differing == 0 || differing == 2);
            n.sort_unstable();
            assert_eq!(n, sorted);
        }
    }

    #[test]
    fn test_swap_allows_self_swap() {
        let mut rng = StdRng::seed_from_u64(11);
        let state = vec![1, 2];
        let unchanged = (0..1000).filter(|_| swap(&state, &mut rng) == state).count();
        // P(p0 == p1) = 1/2 for two positions.
        assert!(unchanged > 350 && unchanged < 650, "got {unchanged}");
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(swap(&[9], &mut rng), vec![9]);
    }
}
