use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{Config, LogRecord, LogWriter};

/// Identifies a registered writer so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WriterId(u64);

/// The logging registry: holds the level configuration and dispatches
/// records to every registered writer.
///
/// Most applications use the process-wide instance from
/// [`Registry::global`] and wire it into the `log` macros with
/// [`Registry::install`]. Isolated instances can be created with
/// [`Registry::new`], which tests of writers typically want.
pub struct Registry {
    state: Mutex<State>,
}

struct State {
    config: Config,
    writers: Vec<(WriterId, Box<dyn LogWriter>)>,
    next_writer: u64,
}

impl Registry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                config: Config::default(),
                writers: Vec::new(),
                next_writer: 0,
            }),
        }
    }

    /// The process-wide registry instance.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Makes the global registry the backend of the `log` crate's macros.
    ///
    /// Records produced by the macros carry their `target` as the logger
    /// name. Fails if another logger was installed first.
    pub fn install() -> Result<(), SetLoggerError> {
        log::set_logger(Self::global())?;
        // Filtering happens per record in `enabled`, so the registry can be
        // reconfigured to any verbosity after installation.
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    /// Replaces the level configuration.
    pub fn configure(&self, config: Config) {
        self.state.lock().unwrap().config = config;
    }

    /// The level in effect for the named logger.
    pub fn level_for(&self, name: &str) -> LevelFilter {
        self.state.lock().unwrap().config.level_for(name)
    }

    /// Registers a writer; every subsequently dispatched record is handed
    /// to it. Returns an id accepted by [`Registry::remove_writer`].
    pub fn add_writer(&self, writer: Box<dyn LogWriter>) -> WriterId {
        let mut state = self.state.lock().unwrap();
        let id = WriterId(state.next_writer);
        state.next_writer += 1;
        state.writers.push((id, writer));
        id
    }

    /// Removes a previously registered writer. Returns whether it was
    /// still registered.
    pub fn remove_writer(&self, id: WriterId) -> bool {
        let mut state = self.state.lock().unwrap();
        let before = state.writers.len();
        state.writers.retain(|(wid, _)| *wid != id);
        state.writers.len() != before
    }

    /// Hands `record` to every registered writer, in registration order.
    ///
    /// Dispatch does not consult the level configuration; level checks
    /// happen up front, in [`Log::enabled`], for records arriving through
    /// the `log` macros.
    pub fn dispatch(&self, record: &LogRecord) {
        let state = self.state.lock().unwrap();
        for (_, writer) in &state.writers {
            writer.write(record);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for Registry {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.dispatch(&LogRecord {
            logger: record.target().to_string(),
            line: record.line(),
            level: record.level(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {
        let state = self.state.lock().unwrap();
        for (_, writer) in &state.writers {
            writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use log::{Level, LevelFilter};

    use super::*;

    struct Capture(Arc<Mutex<Vec<LogRecord>>>);

    impl Capture {
        fn pair() -> (Arc<Mutex<Vec<LogRecord>>>, Box<Capture>) {
            let seen = Arc::new(Mutex::new(Vec::new()));
            (seen.clone(), Box::new(Capture(seen)))
        }
    }

    impl LogWriter for Capture {
        fn write(&self, record: &LogRecord) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    fn record(logger: &str, level: Level, message: &str) -> LogRecord {
        LogRecord {
            logger: logger.into(),
            line: Some(42),
            level,
            message: message.into(),
        }
    }

    #[test]
    fn dispatch_reaches_every_writer() {
        let registry = Registry::new();
        let (a, writer_a) = Capture::pair();
        let (b, writer_b) = Capture::pair();
        registry.add_writer(writer_a);
        registry.add_writer(writer_b);

        registry.dispatch(&record("core", Level::Info, "hello"));

        assert_eq!(a.lock().unwrap().len(), 1);
        assert_eq!(b.lock().unwrap().len(), 1);
        assert_eq!(a.lock().unwrap()[0].message, "hello");
    }

    #[test]
    fn removed_writers_stop_receiving() {
        let registry = Registry::new();
        let (seen, writer) = Capture::pair();
        let id = registry.add_writer(writer);

        registry.dispatch(&record("core", Level::Info, "one"));
        assert!(registry.remove_writer(id));
        registry.dispatch(&record("core", Level::Info, "two"));

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(!registry.remove_writer(id));
    }

    #[test]
    fn levels_fall_back_to_the_root() {
        let registry = Registry::new();
        registry.configure(Config::new(LevelFilter::Warn).logger("chatty", LevelFilter::Trace));

        assert_eq!(registry.level_for("chatty"), LevelFilter::Trace);
        assert_eq!(registry.level_for("anything.else"), LevelFilter::Warn);
    }

    #[test]
    fn facade_records_are_converted_and_filtered() {
        let registry = Registry::new();
        registry.configure(Config::new(LevelFilter::Info));
        let (seen, writer) = Capture::pair();
        registry.add_writer(writer);

        Log::log(
            &registry,
            &log::Record::builder()
                .args(format_args!("computed {} in {} ms", 3, 7))
                .level(Level::Info)
                .target("core.math")
                .line(Some(12))
                .build(),
        );
        Log::log(
            &registry,
            &log::Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .target("core.math")
                .build(),
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].logger, "core.math");
        assert_eq!(seen[0].line, Some(12));
        assert_eq!(seen[0].level, Level::Info);
        assert_eq!(seen[0].message, "computed 3 in 7 ms");
    }

    #[test]
    fn per_logger_overrides_gate_the_facade() {
        let registry = Registry::new();
        registry.configure(Config::new(LevelFilter::Error).logger("verbose", LevelFilter::Debug));
        let (seen, writer) = Capture::pair();
        registry.add_writer(writer);

        Log::log(
            &registry,
            &log::Record::builder()
                .args(format_args!("kept"))
                .level(Level::Debug)
                .target("verbose")
                .build(),
        );
        Log::log(
            &registry,
            &log::Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .target("other")
                .build(),
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].logger, "verbose");
    }
}
