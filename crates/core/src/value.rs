//! Raw prop value classification and breakpoint selection

use crate::theme::{sort_descending, Breakpoint, Theme};
use crate::types::{Dimensions, Value};
use indexmap::IndexMap;
use serde_json::Map;

/// Shape of a raw prop value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Used as-is (or as a theme key)
    Literal(&'a Value),
    /// Breakpoint name → literal, resolved against the viewport
    BreakpointMap(&'a Map<String, Value>),
}

/// Classify a raw prop value.
///
/// An object is a breakpoint map only when every key names one of the
/// theme's breakpoints, so object literals such as `{width, height}` offsets
/// stay literals.
pub fn classify_value<'a>(value: &'a Value, theme: &Theme) -> RawValue<'a> {
    match value {
        Value::Object(map) if map.keys().all(|key| theme.breakpoint(key).is_some()) => {
            RawValue::BreakpointMap(map)
        }
        _ => RawValue::Literal(value),
    }
}

/// Pick the entry for the largest matching breakpoint that has one.
///
/// Smaller breakpoints cascade upwards: an entry for `phone` applies on a
/// tablet unless the map also has a `tablet` entry. Returns `None` when no
/// matching breakpoint has an entry.
pub fn value_for_screen_size<'a>(
    responsive: &'a Map<String, Value>,
    breakpoints: &IndexMap<String, Breakpoint>,
    dimensions: Dimensions,
) -> Option<&'a Value> {
    let selected = sort_descending(breakpoints)
        .into_iter()
        .filter(|(_, bp)| bp.matches(dimensions))
        .find_map(|(name, _)| responsive.get(name).map(|value| (name, value)));

    match selected {
        Some((name, value)) => {
            tracing::trace!(
                "breakpoint '{}' selected for {}x{}",
                name,
                dimensions.width,
                dimensions.height
            );
            Some(value)
        }
        None => {
            tracing::trace!(
                "no breakpoint entry matches {}x{}",
                dimensions.width,
                dimensions.height
            );
            None
        }
    }
}
