//! Session-scoped boolean UI flags.
//!
//! Flags live exactly as long as the `SessionFlags` value, which the `App`
//! owns for one session. Nothing is written to disk.

use std::collections::HashMap;

/// Key of the "show visited only" filter.
pub const FILTER_VISITED_ONLY: &str = "filter-visited-only";

#[derive(Debug, Default, Clone)]
pub struct SessionFlags {
    flags: HashMap<String, bool>,
}

impl SessionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flag, or `initial` if it was never set this session.
    pub fn get(&self, key: &str, initial: bool) -> bool {
        self.flags.get(key).copied().unwrap_or(initial)
    }

    pub fn set(&mut self, key: &str, value: bool) {
        tracing::trace!(key, value, "session flag set");
        self.flags.insert(key.to_string(), value);
    }
}
