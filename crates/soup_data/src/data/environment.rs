use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// One of the five environment scalars every cell is adapted to.
pub enum EnvParam {
    /// Water temperature in °C.
    Temperature,
    /// Acidity on the 0–14 scale.
    Ph,
    /// Dissolved oxygen, percent.
    Oxygen,
    /// Dissolved carbon dioxide, percent.
    Co2,
    /// Light intensity, percent.
    Brightness,
}

impl EnvParam {
    /// All parameters in canonical order (the order readouts are drawn in).
    pub const ALL: [EnvParam; 5] = [
        EnvParam::Temperature,
        EnvParam::Ph,
        EnvParam::Oxygen,
        EnvParam::Co2,
        EnvParam::Brightness,
    ];

    /// Closed range the environment value is clamped to after every update.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            EnvParam::Temperature => (-20.0, 120.0),
            EnvParam::Ph => (0.0, 14.0),
            EnvParam::Oxygen | EnvParam::Co2 | EnvParam::Brightness => (0.0, 100.0),
        }
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EnvParam::Temperature => "Temperature",
            EnvParam::Ph => "pH",
            EnvParam::Oxygen => "O2",
            EnvParam::Co2 => "CO2",
            EnvParam::Brightness => "Brightness",
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            EnvParam::Temperature => "°C",
            EnvParam::Ph => "",
            EnvParam::Oxygen | EnvParam::Co2 | EnvParam::Brightness => "%",
        }
    }

    /// Formats a value the way the overlay shows it, e.g. `pH: 7.00`.
    #[must_use]
    pub fn readout(self, value: f64) -> String {
        match self {
            EnvParam::Ph => format!("{}: {:.2}", self.label(), value),
            _ => format!("{}: {:.1}{}", self.label(), value, self.unit()),
        }
    }
}

impl fmt::Display for EnvParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five values, one per [`EnvParam`].
///
/// Used for the environment itself, for cell tolerances, and for every
/// per-parameter table in the configuration (drift, survival thresholds,
/// breeding band, mutation bounds).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Scalars {
    pub temperature: f64,
    pub ph: f64,
    pub oxygen: f64,
    pub co2: f64,
    pub brightness: f64,
}

impl Scalars {
    #[must_use]
    pub const fn new(temperature: f64, ph: f64, oxygen: f64, co2: f64, brightness: f64) -> Self {
        Self {
            temperature,
            ph,
            oxygen,
            co2,
            brightness,
        }
    }

    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    #[must_use]
    pub fn get(&self, param: EnvParam) -> f64 {
        match param {
            EnvParam::Temperature => self.temperature,
            EnvParam::Ph => self.ph,
            EnvParam::Oxygen => self.oxygen,
            EnvParam::Co2 => self.co2,
            EnvParam::Brightness => self.brightness,
        }
    }

    pub fn get_mut(&mut self, param: EnvParam) -> &mut f64 {
        match param {
            EnvParam::Temperature => &mut self.temperature,
            EnvParam::Ph => &mut self.ph,
            EnvParam::Oxygen => &mut self.oxygen,
            EnvParam::Co2 => &mut self.co2,
            EnvParam::Brightness => &mut self.brightness,
        }
    }

    pub fn set(&mut self, param: EnvParam, value: f64) {
        *self.get_mut(param) = value;
    }

    /// Builds a new set by evaluating `f` once per parameter, in canonical order.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(EnvParam) -> f64) -> Self {
        let mut out = Self::default();
        for param in EnvParam::ALL {
            out.set(param, f(param));
        }
        out
    }

    #[must_use]
    pub fn map(&self, mut f: impl FnMut(EnvParam, f64) -> f64) -> Self {
        Self::from_fn(|p| f(p, self.get(p)))
    }

    /// Per-parameter absolute difference.
    #[must_use]
    pub fn deviation(&self, other: &Scalars) -> Scalars {
        Self::from_fn(|p| (self.get(p) - other.get(p)).abs())
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnvParam, f64)> + '_ {
        EnvParam::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    #[must_use]
    pub fn all(&self, mut pred: impl FnMut(EnvParam, f64) -> bool) -> bool {
        self.iter().all(|(p, v)| pred(p, v))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.all(|_, v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip_every_param() {
        let mut s = Scalars::default();
        for (i, p) in EnvParam::ALL.into_iter().enumerate() {
            s.set(p, i as f64);
        }
        assert_eq!(s, Scalars::new(0.0, 1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_deviation_is_symmetric_and_absolute() {
        let a = Scalars::new(25.0, 7.0, 21.0, 0.5, 50.0);
        let b = Scalars::new(30.0, 6.0, 21.0, 1.5, 40.0);
        let d = a.deviation(&b);
        assert_eq!(d, b.deviation(&a));
        assert_eq!(d, Scalars::new(5.0, 1.0, 0.0, 1.0, 10.0));
    }

    #[test]
    fn test_clamp_uses_declared_range() {
        assert_eq!(EnvParam::Ph.clamp(15.0), 14.0);
        assert_eq!(EnvParam::Temperature.clamp(-40.0), -20.0);
        assert_eq!(EnvParam::Oxygen.clamp(42.0), 42.0);
    }

    #[test]
    fn test_readout_format() {
        assert_eq!(EnvParam::Ph.readout(7.0), "pH: 7.00");
        assert_eq!(EnvParam::Temperature.readout(25.04), "Temperature: 25.0°C");
        assert_eq!(EnvParam::Co2.readout(0.5), "CO2: 0.5%");
    }

    #[test]
    fn test_scalars_parse_rejects_unknown_keys() {
        let err = serde_json::from_str::<Scalars>(
            r#"{"temperature":1,"ph":1,"oxygen":1,"co2":1,"brightness":1,"salinity":1}"#,
        );
        assert!(err.is_err());
    }
}
