//! Design-system theme store
//!
//! A theme is a set of named categories (`spacing`, `colors`, `opacities`, ...)
//! mapping semantic keys to either a static value or a function computed at
//! resolution time. Breakpoints live in their own reserved table.

use crate::types::{Dimensions, ThemeValueParams, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Computed theme entry, e.g. a rem → px conversion for a spacing scale
pub type ThemeValueFn = Arc<dyn Fn(ThemeValueParams<'_>) -> Value + Send + Sync>;

/// A single entry of a theme category
#[derive(Clone)]
pub enum ThemeEntry {
    Literal(Value),
    Computed(ThemeValueFn),
}

impl ThemeEntry {
    /// Produce the literal for this entry, invoking it if it is computed.
    pub fn resolve(&self, params: ThemeValueParams<'_>) -> Value {
        match self {
            ThemeEntry::Literal(value) => value.clone(),
            ThemeEntry::Computed(func) => func(params),
        }
    }
}

impl fmt::Debug for ThemeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeEntry::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            ThemeEntry::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// Minimum viewport for a breakpoint
///
/// A bare number is a minimum width; the object form also requires a
/// minimum height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Breakpoint {
    Width(f64),
    Dimensions { width: f64, height: f64 },
}

impl Breakpoint {
    pub fn width(&self) -> f64 {
        match *self {
            Breakpoint::Width(width) => width,
            Breakpoint::Dimensions { width, .. } => width,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            Breakpoint::Width(_) => 0.0,
            Breakpoint::Dimensions { height, .. } => height,
        }
    }

    /// Whether a viewport of `dimensions` is at or above this breakpoint.
    pub fn matches(&self, dimensions: Dimensions) -> bool {
        match *self {
            Breakpoint::Width(width) => dimensions.width >= width,
            Breakpoint::Dimensions { width, height } => {
                dimensions.width >= width && dimensions.height >= height
            }
        }
    }

    /// Ascending order by minimum width; height never breaks ties.
    fn cmp_size(&self, other: &Breakpoint) -> Ordering {
        self.width().total_cmp(&other.width())
    }
}

pub type ThemeCategory = IndexMap<String, ThemeEntry>;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    categories: IndexMap<String, ThemeCategory>,
    breakpoints: IndexMap<String, Breakpoint>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a static entry into `category`.
    pub fn set(&mut self, category: &str, key: &str, value: impl Into<Value>) {
        self.insert(category, key, ThemeEntry::Literal(value.into()));
    }

    /// Insert a computed entry into `category`.
    pub fn set_fn<F>(&mut self, category: &str, key: &str, func: F)
    where
        F: Fn(ThemeValueParams<'_>) -> Value + Send + Sync + 'static,
    {
        self.insert(category, key, ThemeEntry::Computed(Arc::new(func)));
    }

    pub fn insert(&mut self, category: &str, key: &str, entry: ThemeEntry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(key.to_string(), entry);
    }

    pub fn set_breakpoint(&mut self, name: &str, breakpoint: Breakpoint) {
        self.breakpoints.insert(name.to_string(), breakpoint);
    }

    /// Builder-style `set`.
    pub fn with(mut self, category: &str, key: &str, value: impl Into<Value>) -> Self {
        self.set(category, key, value);
        self
    }

    /// Builder-style `set_breakpoint`.
    pub fn with_breakpoint(mut self, name: &str, breakpoint: Breakpoint) -> Self {
        self.set_breakpoint(name, breakpoint);
        self
    }

    pub fn category(&self, name: &str) -> Option<&ThemeCategory> {
        self.categories.get(name)
    }

    /// Look up `key` in `category`.
    ///
    /// `None` means the entry is absent. A present entry holding `0`, `false`
    /// or `""` is still `Some`.
    pub fn lookup(&self, category: &str, key: &str) -> Option<&ThemeEntry> {
        self.categories.get(category)?.get(key)
    }

    pub fn breakpoints(&self) -> &IndexMap<String, Breakpoint> {
        &self.breakpoints
    }

    pub fn breakpoint(&self, name: &str) -> Option<Breakpoint> {
        self.breakpoints.get(name).copied()
    }

    /// Breakpoints ordered largest first.
    pub fn breakpoints_descending(&self) -> Vec<(&str, Breakpoint)> {
        sort_descending(&self.breakpoints)
    }
}

pub(crate) fn sort_descending(
    breakpoints: &IndexMap<String, Breakpoint>,
) -> Vec<(&str, Breakpoint)> {
    let mut sorted: Vec<(&str, Breakpoint)> = breakpoints
        .iter()
        .map(|(name, bp)| (name.as_str(), *bp))
        .collect();
    // stable, so equal widths keep declaration order
    sorted.sort_by(|a, b| b.1.cmp_size(&a.1));
    sorted
}

/// JSON shape of a theme: reserved `breakpoints` plus static categories
#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(default)]
    breakpoints: IndexMap<String, Breakpoint>,
    #[serde(flatten)]
    categories: IndexMap<String, IndexMap<String, Value>>,
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTheme::deserialize(deserializer)?;
        let categories = raw
            .categories
            .into_iter()
            .map(|(name, entries)| {
                let entries: ThemeCategory = entries
                    .into_iter()
                    .map(|(key, value)| (key, ThemeEntry::Literal(value)))
                    .collect();
                (name, entries)
            })
            .collect();

        Ok(Theme {
            categories,
            breakpoints: raw.breakpoints,
        })
    }
}
