use crate::config::SurvivalRule;
use crate::environment::Environment;
use soup_data::{Cell, EnvParam, Scalars};

/// Parameters whose deviation from the cell's tolerance exceeds the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exceeded {
    pub temperature: bool,
    pub ph: bool,
    pub oxygen: bool,
    pub co2: bool,
    pub brightness: bool,
}

impl Exceeded {
    #[must_use]
    pub fn measure(env: &Environment, tolerances: &Scalars, thresholds: &Scalars) -> Self {
        let d = env.values().deviation(tolerances);
        Self {
            temperature: d.temperature > thresholds.temperature,
            ph: d.ph > thresholds.ph,
            oxygen: d.oxygen > thresholds.oxygen,
            co2: d.co2 > thresholds.co2,
            brightness: d.brightness > thresholds.brightness,
        }
    }

    #[must_use]
    pub fn contains(&self, param: EnvParam) -> bool {
        match param {
            EnvParam::Temperature => self.temperature,
            EnvParam::Ph => self.ph,
            EnvParam::Oxygen => self.oxygen,
            EnvParam::Co2 => self.co2,
            EnvParam::Brightness => self.brightness,
        }
    }

    pub fn params(&self) -> impl Iterator<Item = EnvParam> + '_ {
        EnvParam::ALL.into_iter().filter(|p| self.contains(*p))
    }

    #[must_use]
    pub fn is_lethal(&self, rule: SurvivalRule) -> bool {
        match rule {
            SurvivalRule::Uniform => {
                self.temperature || self.ph || self.oxygen || self.co2 || self.brightness
            }
            // CO2 and brightness are AND'd together, then OR'd with the rest.
            SurvivalRule::Literal => {
                self.temperature || self.ph || self.oxygen || (self.co2 && self.brightness)
            }
        }
    }

    /// Comma-separated labels, used as the recorded cause of death.
    #[must_use]
    pub fn describe(&self) -> String {
        self.params()
            .map(EnvParam::label)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[must_use]
pub fn survives(cell: &Cell, env: &Environment, thresholds: &Scalars, rule: SurvivalRule) -> bool {
    !Exceeded::measure(env, &cell.tolerances, thresholds).is_lethal(rule)
}

/// Removes every cell the environment kills and returns them with the
/// parameters that killed them. Order of survivors is preserved.
pub fn cull(
    cells: &mut Vec<Cell>,
    env: &Environment,
    thresholds: &Scalars,
    rule: SurvivalRule,
) -> Vec<(Cell, Exceeded)> {
    let mut dead = Vec::new();
    cells.retain(|cell| {
        let exceeded = Exceeded::measure(env, &cell.tolerances, thresholds);
        if exceeded.is_lethal(rule) {
            dead.push((cell.clone(), exceeded));
            false
        } else {
            true
        }
    });
    dead
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::lifecycle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn founder(env: &Environment) -> Cell {
        lifecycle::create_founder(100.0, env, 0, &mut ChaCha8Rng::seed_from_u64(1))
    }

    #[test]
    fn test_adapted_cell_survives() {
        let config = AppConfig::default();
        let env = Environment::new(config.environment);
        let cell = founder(&env);
        assert!(survives(&cell, &env, &config.survival, SurvivalRule::Uniform));
        assert!(survives(&cell, &env, &config.survival, SurvivalRule::Literal));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let config = AppConfig::default();
        let mut env = Environment::new(config.environment);
        let cell = founder(&env);
        env.set(
            EnvParam::Temperature,
            cell.tolerances.temperature + config.survival.temperature,
        );
        assert!(survives(&cell, &env, &config.survival, SurvivalRule::Uniform));
        env.set(
            EnvParam::Temperature,
            cell.tolerances.temperature + config.survival.temperature + 0.01,
        );
        assert!(!survives(&cell, &env, &config.survival, SurvivalRule::Uniform));
    }

    #[test]
    fn test_literal_rule_spares_lone_co2_excess() {
        let config = AppConfig::default();
        let mut env = Environment::new(config.environment);
        let cell = founder(&env);
        env.set(EnvParam::Co2, 90.0);

        assert!(!survives(&cell, &env, &config.survival, SurvivalRule::Uniform));
        assert!(survives(&cell, &env, &config.survival, SurvivalRule::Literal));

        env.set(EnvParam::Brightness, 100.0);
        assert!(!survives(&cell, &env, &config.survival, SurvivalRule::Literal));
    }

    #[test]
    fn test_literal_rule_spares_lone_brightness_excess() {
        let config = AppConfig::default();
        let mut env = Environment::new(config.environment);
        let cell = founder(&env);
        env.set(EnvParam::Brightness, 100.0);
        assert!(survives(&cell, &env, &config.survival, SurvivalRule::Literal));
        assert!(!survives(&cell, &env, &config.survival, SurvivalRule::Uniform));
    }

    #[test]
    fn test_cull_reports_cause() {
        let config = AppConfig::default();
        let mut env = Environment::new(config.environment);
        let mut cells = vec![founder(&env)];
        env.set(EnvParam::Ph, 14.0);
        let dead = cull(&mut cells, &env, &config.survival, SurvivalRule::Uniform);
        assert!(cells.is_empty());
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].1.describe(), "pH");
    }
}
