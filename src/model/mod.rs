pub mod boundary {
    pub use flocksim_core::boundary::*;
}
pub mod config {
    pub use flocksim_core::config::*;
}
pub mod error {
    pub use flocksim_core::error::*;
}
pub mod interaction {
    pub use flocksim_core::interaction::*;
}
pub mod lifecycle {
    pub use flocksim_core::lifecycle::*;
}
pub mod metrics {
    pub use flocksim_core::metrics::*;
}
pub mod snapshot {
    pub use flocksim_core::snapshot::*;
}
pub mod steering {
    pub use flocksim_core::steering::*;
}
pub mod targeting {
    pub use flocksim_core::targeting::*;
}

pub mod state {
    pub use flocksim_data::*;
}

pub mod flock;
