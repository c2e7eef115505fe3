//! Named counters on a player or the shared area.
//!
//! The set of counter names is fixed when the table is configured. Loading
//! a snapshot only updates values of counters that already exist, it never
//! creates new ones.

use serde::{Deserialize, Serialize};

/// One named counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub name: String,
    pub value: i64,
}

/// Ordered collection of named counters.
///
/// ```
/// use table_state::piles::Counters;
///
/// let mut counters = Counters::new().with_counter("Threat", 0);
/// assert!(counters.set("Threat", 28));
/// assert!(!counters.set("Round", 1)); // unknown names are refused
/// assert_eq!(counters.get("Threat"), Some(28));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    entries: Vec<Counter>,
}

impl Counters {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a counter with an initial value (builder pattern).
    ///
    /// Re-adding an existing name resets its value.
    #[must_use]
    pub fn with_counter(mut self, name: impl Into<String>, initial: i64) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.value = initial,
            None => self.entries.push(Counter {
                name,
                value: initial,
            }),
        }
        self
    }

    /// Get a counter value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.iter().find(|c| c.name == name).map(|c| c.value)
    }

    /// Set the value of an existing counter.
    ///
    /// Returns false (and changes nothing) if no counter has this name.
    pub fn set(&mut self, name: &str, value: i64) -> bool {
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(counter) => {
                counter.value = value;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, value) pairs in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|c| (c.name.as_str(), c.value))
    }
}
