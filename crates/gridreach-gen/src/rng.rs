use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for the generators: deterministic when `seed` is given,
/// seeded from the operating system otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
