//! A cache of compiled format strings.
//!
//! Format strings are typically literals, so a program compiles the same few
//! strings over and over again. A [`FormatCache`] compiles each distinct
//! format string once and hands out shared references to the result
//! afterwards. [`format_str`] does the same with one process-wide cache.
//!
//! ```
//! # use ansimark::FormatCache;
//! let cache = FormatCache::new();
//! let first = cache.get("#[Green]ok")?;
//! let second = cache.get("#[Green]ok")?;
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(&*first, "\x1b[0m\x1b[32mok\x1b[0m");
//! # Ok::<(), ansimark::FormatError>(())
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::FormatError;
use crate::parser::compile;

/// A thread-safe cache of compiled format strings.
///
/// Failed compilations are not cached.
#[derive(Debug, Default)]
pub struct FormatCache {
    entries: Mutex<HashMap<String, Arc<str>>>,
}

impl FormatCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // The map is only ever updated by a single insertion, so a panic while
    // holding the lock cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<str>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the compiled format string, compiling it if necessary.
    pub fn get(&self, input: &str) -> Result<Arc<str>, FormatError> {
        if let Some(compiled) = self.lock().get(input) {
            return Ok(Arc::clone(compiled));
        }

        // Compile without holding the lock. If another thread raced us, keep
        // its result so that all callers share one allocation.
        let compiled: Arc<str> = compile(input)?.into();
        let mut entries = self.lock();
        let entry = entries.entry(input.to_owned()).or_insert(compiled);
        Ok(Arc::clone(entry))
    }

    /// Determine whether the cache contains a compiled format string for the
    /// input.
    pub fn contains(&self, input: &str) -> bool {
        self.lock().contains_key(input)
    }

    /// Get the number of cached format strings.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Determine whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove all cached format strings.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Get the compiled format string from the process-wide cache.
///
/// ```
/// # use ansimark::format_str;
/// assert_eq!(&*format_str("#[Bold]#$")?, "\x1b[0m\x1b[1m%s\x1b[0m");
/// # Ok::<(), ansimark::FormatError>(())
/// ```
pub fn format_str(input: &str) -> Result<Arc<str>, FormatError> {
    static CACHE: OnceLock<FormatCache> = OnceLock::new();
    CACHE.get_or_init(FormatCache::new).get(input)
}

#[cfg(test)]
mod test {
    use super::{format_str, FormatCache};
    use crate::error::{ErrorKind, FormatError};
    use std::sync::Arc;

    #[test]
    fn test_hit_and_miss() -> Result<(), FormatError> {
        let cache = FormatCache::new();
        assert!(cache.is_empty());

        let red = cache.get("#[Red]r")?;
        let blue = cache.get("#[Blue]b")?;
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("#[Red]r"));
        assert!(Arc::ptr_eq(&red, &cache.get("#[Red]r")?));
        assert!(!Arc::ptr_eq(&red, &blue));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(!Arc::ptr_eq(&red, &cache.get("#[Red]r")?));
        Ok(())
    }

    #[test]
    fn test_failure_not_cached() {
        let cache = FormatCache::new();
        let error = cache.get("#[Purple]").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedIdentifier);
        assert!(cache.is_empty());
        assert!(!cache.contains("#[Purple]"));
    }

    #[test]
    fn test_threads() {
        let cache = Arc::new(FormatCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get("#[Bold, 1:2:3]#$").unwrap())
            })
            .collect();

        let results: Vec<Arc<str>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.len(), 1);
        for result in &results {
            assert!(Arc::ptr_eq(result, &results[0]));
        }
    }

    #[test]
    fn test_format_str() {
        let first = format_str("#[Cyan]global #$").unwrap();
        let second = format_str("#[Cyan]global #$").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(format_str("#[Cyan").is_err());
    }
}
