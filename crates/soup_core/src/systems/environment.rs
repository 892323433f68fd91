use crate::config::AppConfig;
use crate::environment::Environment;
use rand::Rng;

/// Drift step. A no-op for rule sets without an environment.
///
/// Returns `true` if the environment changed.
pub fn drift<R: Rng>(env: &mut Environment, config: &AppConfig, rng: &mut R) -> bool {
    if !config.simulation.ruleset.has_environment() {
        return false;
    }
    env.drift(&config.drift, rng);
    tracing::trace!(readouts = ?env.readouts(), "Environment drifted");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ruleset;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_primordial_environment_is_frozen() {
        let mut config = AppConfig::default();
        config.simulation.ruleset = Ruleset::Primordial;
        let mut env = Environment::new(config.environment);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..50 {
            assert!(!drift(&mut env, &config, &mut rng));
        }
        assert_eq!(env, Environment::new(config.environment));
    }

    #[test]
    fn test_adaptive_environment_moves() {
        let config = AppConfig::default();
        let mut env = Environment::new(config.environment);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(drift(&mut env, &config, &mut rng));
        assert_ne!(env, Environment::new(config.environment));
    }
}
