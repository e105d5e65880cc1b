pub mod config_store;
pub mod logging;
pub mod path_processing;

pub use config_store::*;
pub use logging::init_tracing;
pub use path_processing::expand_tilde;
