pub mod audit;
pub mod collector;
pub mod config;
pub mod model;
pub mod output;
pub mod registry;

pub use collector::{collect_inventory, revert_name, ASSET_TYPE};
pub use config::Config;
pub use model::{Advisory, AuditReport, Inventory, NormalizedDependency};
pub use registry::{ComposerRegistry, InstalledRegistry};
