use std::collections::HashMap;

use log::LevelFilter;

/// Level configuration for a [`Registry`].
///
/// A logger name with an explicit entry uses that level; every other
/// logger falls back to the root level.
///
/// [`Registry`]: crate::Registry
#[derive(Debug, Clone)]
pub struct Config {
    root: LevelFilter,
    overrides: HashMap<String, LevelFilter>,
}

impl Config {
    /// Creates a configuration with the given root level and no per-logger
    /// overrides.
    pub fn new(root: LevelFilter) -> Self {
        Self {
            root,
            overrides: HashMap::new(),
        }
    }

    /// Sets the level for a single named logger.
    pub fn logger(mut self, name: impl Into<String>, level: LevelFilter) -> Self {
        self.overrides.insert(name.into(), level);
        self
    }

    /// The root level, applied to every logger without an override.
    pub fn root(&self) -> LevelFilter {
        self.root
    }

    /// The level that applies to the logger called `name`.
    pub fn level_for(&self, name: &str) -> LevelFilter {
        self.overrides.get(name).copied().unwrap_or(self.root)
    }
}

impl Default for Config {
    /// An Info root level with no per-logger overrides.
    fn default() -> Self {
        Self::new(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_level_is_the_fallback() {
        let config = Config::new(LevelFilter::Warn)
            .logger("chatty", LevelFilter::Trace)
            .logger("quiet", LevelFilter::Error);

        assert_eq!(config.level_for("chatty"), LevelFilter::Trace);
        assert_eq!(config.level_for("quiet"), LevelFilter::Error);
        assert_eq!(config.level_for("anything.else"), LevelFilter::Warn);
    }

    #[test]
    fn default_root_is_info() {
        assert_eq!(Config::default().root(), LevelFilter::Info);
        assert_eq!(Config::default().level_for("core"), LevelFilter::Info);
    }
}
