use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

use crate::engine::Regex;
use crate::errors::RegexResult;
use crate::options::RegexOptions;

/// Pattern text -> compiled [`Regex`], shared by every caller.
/// Failed compilations are not remembered.
#[derive(Debug, Default)]
pub struct RegexCache {
    options: RegexOptions,
    entries: RwLock<FastHashMap<Box<str>, Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegexOptions) -> Self {
        Self {
            options,
            entries: RwLock::new(FastHashMap::new()),
        }
    }

    pub fn options(&self) -> &RegexOptions {
        &self.options
    }

    pub fn get_or_compile(&self, pattern: &str) -> RegexResult<Regex> {
        if let Some(regex) = self.entries.read().get(pattern) {
            return Ok(regex.clone());
        }

        // compile outside the lock; a racing writer may win, keep its entry
        let compiled = Regex::with_options(pattern, &self.options)?;
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(pattern) {
            return Ok(existing.clone());
        }

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "cache_insert",
            pattern = %pattern,
            states = compiled.automaton().state_count() as u64
        );
        entries.insert(pattern.to_string().into_boxed_str(), compiled.clone());
        Ok(compiled)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.read().contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();
        entries.shrink_to_fit();
    }
}
