pub use soup_core::{Callback, Scheduler, Simulation, TimerTarget};
pub mod config {
    pub use soup_core::config::*;
}
pub mod environment {
    pub use soup_core::environment::*;
}
pub mod lifecycle {
    pub use soup_core::lifecycle::*;
}
pub mod history {
    pub use soup_core::history::*;
}
pub mod snapshot {
    pub use soup_core::snapshot::*;
}
pub mod systems {
    pub use soup_core::systems::*;
}
pub mod state {
    pub use soup_data::*;
}
