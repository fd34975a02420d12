use rand::{Rng, RngCore, SeedableRng};

/// Random source used by sessions. Generators and crumb bursts only see `&mut dyn RngCore`.
pub type DemoRng = rand::rngs::StdRng;

/// Seeded when reproducible output is wanted, OS entropy otherwise.
pub fn demo_rng(seed: Option<u64>) -> DemoRng {
    match seed {
        Some(seed) => DemoRng::seed_from_u64(seed),
        None => DemoRng::from_os_rng(),
    }
}

/// Uniform sample in `[0, 1)`.
pub(crate) fn unit(rng: &mut dyn RngCore) -> f64 {
    rng.random::<f64>()
}

/// Uniform sample in `[-0.5, 0.5)`.
pub(crate) fn centered(rng: &mut dyn RngCore) -> f64 {
    unit(rng) - 0.5
}
