use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random source owned by the scene.
pub type SceneRng = StdRng;

pub fn new_rng(seed: Option<u64>) -> SceneRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform in `[0, bound)`. A zero bound gives zero instead of panicking.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, bound: f32) -> f32 {
    rng.gen::<f32>() * bound
}

/// Uniform in `[low, high)`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    low + random_float(rng, high - low)
}

pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}

pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f32) -> bool {
    rng.gen::<f32>() < probability
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rngs_agree() {
        let mut a = new_rng(Some(7));
        let mut b = new_rng(Some(7));
        for _ in 0..16 {
            assert_eq!(random_float(&mut a, 10.0), random_float(&mut b, 10.0));
        }
    }

    #[test]
    fn ranges_hold() {
        let mut rng = new_rng(Some(1));
        for _ in 0..1000 {
            let x = random_between(&mut rng, 2.0, 5.0);
            assert!((2.0..5.0).contains(&x));
            assert!(random_index(&mut rng, 3) < 3);
        }
        assert_eq!(random_float(&mut rng, 0.0), 0.0);
        assert!(!chance(&mut rng, 0.0));
        assert!(chance(&mut rng, 1.0));
    }
}
