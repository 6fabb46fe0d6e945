//! Configuration loading for the working-time ledger.
//!
//! Settings are optional: without a configuration file the built-in
//! [`Settings::default`] applies.
//!
//! # Example
//!
//! ```no_run
//! use arbeitszeit::config::ConfigLoader;
//!
//! let settings = ConfigLoader::load("./arbeitszeit.yaml").unwrap();
//! println!("Holiday anchor: {}", settings.holiday_anchor);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OutputFormat, Settings};
