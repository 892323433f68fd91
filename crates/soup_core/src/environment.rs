use rand::Rng;
use serde::{Deserialize, Serialize};
use soup_data::{EnvParam, Scalars};

/// The five bounded scalars every cell is measured against.
///
/// Values are clamped to [`EnvParam::range`] on construction and after every
/// mutation, so readers can rely on them being in range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "Scalars", into = "Scalars")]
pub struct Environment {
    values: Scalars,
}

impl From<Scalars> for Environment {
    fn from(values: Scalars) -> Self {
        Self::new(values)
    }
}

impl From<Environment> for Scalars {
    fn from(env: Environment) -> Self {
        env.values
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(crate::config::AppConfig::default().environment)
    }
}

impl Environment {
    #[must_use]
    pub fn new(initial: Scalars) -> Self {
        Self {
            values: initial.map(|p, v| p.clamp(v)),
        }
    }

    #[must_use]
    pub fn values(&self) -> &Scalars {
        &self.values
    }

    #[must_use]
    pub fn get(&self, param: EnvParam) -> f64 {
        self.values.get(param)
    }

    /// Forces a value, clamped into range. Used by tests and scripted shocks.
    pub fn set(&mut self, param: EnvParam, value: f64) {
        self.values.set(param, param.clamp(value));
    }

    /// Applies an independent uniform perturbation in `[-amount, +amount]`
    /// to each scalar, then clamps.
    pub fn drift<R: Rng>(&mut self, amounts: &Scalars, rng: &mut R) {
        for param in EnvParam::ALL {
            let amount = amounts.get(param);
            let delta = if amount > 0.0 {
                rng.gen_range(-amount..=amount)
            } else {
                0.0
            };
            self.set(param, self.get(param) + delta);
        }
    }

    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.values.all(|p, v| {
            let (lo, hi) = p.range();
            (lo..=hi).contains(&v)
        })
    }

    /// Overlay lines in canonical parameter order.
    #[must_use]
    pub fn readouts(&self) -> Vec<String> {
        self.values.iter().map(|(p, v)| p.readout(v)).collect()
    }
}
