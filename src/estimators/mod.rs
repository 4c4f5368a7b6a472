pub mod approaches;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod entropy;
pub mod mutual_information;
pub mod pid;
pub mod roles;
pub mod traits;

pub use config::{EngineConfig, EqualIntervalBinning};
pub use engine::{InfoEngine, State};
pub use pid::Pid;
pub use roles::{Role, RoleVector};
pub use traits::{GlobalValue, OutcomeValues};
