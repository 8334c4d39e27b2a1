//! A small logging facility built around a process-wide registry.
//!
//! Loggers are identified by name and carry a severity level; a name
//! without an explicit level falls back to the registry's root level.
//! Records that pass the level check are dispatched to every registered
//! [`LogWriter`].
//!
//! Rather than inventing its own macro set, the registry speaks the [`log`]
//! crate's language: [`Registry::install`] makes it the backend of the
//! standard `log::info!`-style macros, with each macro's `target` acting as
//! the logger name.
//!
//! ```no_run
//! use gyre_log::{Config, ConsoleWriter, Registry};
//! use log::LevelFilter;
//!
//! let registry = Registry::global();
//! registry.configure(Config::new(LevelFilter::Info).logger("physics", LevelFilter::Debug));
//! registry.add_writer(Box::new(ConsoleWriter));
//! Registry::install().unwrap();
//!
//! log::info!(target: "physics", "step took {} ms", 3);
//! ```

mod config;
mod record;
mod registry;
mod writer;

pub use config::Config;
pub use record::LogRecord;
pub use registry::{Registry, WriterId};
pub use writer::{ConsoleWriter, LogWriter};
