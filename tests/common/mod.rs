use soup_lib::model::config::AppConfig;
use soup_lib::model::state::EnvParam;
use soup_lib::model::Simulation;

type ConfigMod = Box<dyn FnOnce(&mut AppConfig)>;

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    seed: u64,
    config_mods: Vec<ConfigMod>,
    founders: Vec<(f64, f64)>,
    shocks: Vec<(EnvParam, f64)>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            seed: 42,
            config_mods: Vec::new(),
            founders: Vec::new(),
            shocks: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig) + 'static,
    {
        self.config_mods.push(Box::new(modifier));
        self
    }

    /// Founder adapted to the initial environment.
    pub fn with_founder(mut self, x: f64, y: f64) -> Self {
        self.founders.push((x, y));
        self
    }

    /// Environment override applied after the founders are seeded.
    pub fn with_shock(mut self, param: EnvParam, value: f64) -> Self {
        self.shocks.push((param, value));
        self
    }

    pub fn build(mut self) -> Simulation {
        for modifier in self.config_mods {
            modifier(&mut self.config);
        }
        let mut sim = if self.founders.is_empty() {
            Simulation::with_seed(self.config, self.seed)
        } else {
            Simulation::empty(self.config, self.seed)
        }
        .expect("Failed to create simulation in test builder");

        for (x, y) in self.founders {
            sim.spawn_founder_at(x, y);
        }
        for (param, value) in self.shocks {
            sim.env.set(param, value);
        }
        sim
    }
}
