use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Whole number in `[lo, hi]`, as a float.
pub fn rand_int_f<R: Rng>(rng: &mut R, lo: i32, hi: i32) -> f32 {
    rng.gen_range(lo..=hi) as f32
}

pub fn rand_float<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    rng.gen_range(lo..=hi)
}
