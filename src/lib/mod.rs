pub mod commands;
pub mod country;
pub mod dataset;
pub mod error;
pub mod registry;
pub mod settings;
pub mod telemetry;
pub mod validation;

pub use country::{Country, KeyField};
pub use error::{DatasetError, LookupError};
pub use registry::Registry;
