//! Style function factory
//!
//! A [`StyleFunction`] reads one logical prop, resolves it against the theme
//! (optionally per breakpoint), runs the optional transform and emits a
//! single-key [`StyleObject`].
//!
//! ```text
//! presence → literal | breakpoint map → theme lookup | passthrough → transform
//! ```

use crate::error::StyleError;
use crate::types::{Props, RenderContext, StyleObject, ThemeValueParams, TransformParams, Value};
use crate::value::{classify_value, value_for_screen_size, RawValue};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Post-lookup value transform, e.g. `transparency → 1 - transparency`
pub type TransformFn = Arc<dyn Fn(TransformParams<'_>) -> Value + Send + Sync>;

/// Declarative description of a style function
///
/// Deserializes from `{"property", "styleProperty", "themeKey"}`; a transform
/// can only be attached in code.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFunctionConfig {
    /// Logical prop name read from the input props
    pub property: String,
    /// Output key, defaults to `property`
    #[serde(default)]
    pub style_property: Option<String>,
    /// Theme category the value is looked up in
    #[serde(default)]
    pub theme_key: Option<String>,
    #[serde(skip)]
    pub transform: Option<TransformFn>,
}

impl StyleFunctionConfig {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Self::default()
        }
    }

    pub fn style_property(mut self, style_property: impl Into<String>) -> Self {
        self.style_property = Some(style_property.into());
        self
    }

    pub fn theme_key(mut self, theme_key: impl Into<String>) -> Self {
        self.theme_key = Some(theme_key.into());
        self
    }

    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(TransformParams<'_>) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }
}

impl fmt::Debug for StyleFunctionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleFunctionConfig")
            .field("property", &self.property)
            .field("style_property", &self.style_property)
            .field("theme_key", &self.theme_key)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Built, reusable style function
///
/// Holds only the immutable config, so it can be shared across threads and
/// applied any number of times.
#[derive(Debug, Clone)]
pub struct StyleFunction {
    config: StyleFunctionConfig,
}

impl StyleFunction {
    /// Build a style function from its config.
    ///
    /// No theme access happens here; the only failure is an empty `property`.
    pub fn new(config: StyleFunctionConfig) -> Result<Self, StyleError> {
        if config.property.is_empty() {
            return Err(StyleError::EmptyProperty);
        }

        tracing::debug!(
            "style function built: {} -> {} (themeKey: {:?})",
            config.property,
            config.style_property.as_deref().unwrap_or(&config.property),
            config.theme_key
        );

        Ok(Self { config })
    }

    pub fn property(&self) -> &str {
        &self.config.property
    }

    /// The key this function writes into the style object.
    pub fn output_key(&self) -> &str {
        self.config
            .style_property
            .as_deref()
            .unwrap_or(&self.config.property)
    }

    pub fn theme_key(&self) -> Option<&str> {
        self.config.theme_key.as_deref()
    }

    pub fn config(&self) -> &StyleFunctionConfig {
        &self.config
    }

    /// Resolve this function's prop from `props`.
    ///
    /// Returns an empty object when the prop is absent or when a breakpoint
    /// map has no entry for the current viewport. Fails only on a theme miss.
    pub fn apply(&self, props: &Props, ctx: RenderContext<'_>) -> Result<StyleObject, StyleError> {
        let Some(raw) = props.get(&self.config.property) else {
            return Ok(StyleObject::new());
        };

        let selected = match classify_value(raw, ctx.theme) {
            RawValue::Literal(value) => value,
            RawValue::BreakpointMap(responsive) => {
                match value_for_screen_size(responsive, ctx.theme.breakpoints(), ctx.dimensions) {
                    Some(value) => value,
                    None => return Ok(StyleObject::new()),
                }
            }
        };

        let resolved = theme_value(selected, self.theme_key(), ctx)?;
        let value = match &self.config.transform {
            Some(transform) => transform(TransformParams {
                value: &resolved,
                theme: ctx.theme,
                dimensions: ctx.dimensions,
                theme_key: self.theme_key(),
            }),
            None => resolved,
        };

        let mut style = StyleObject::with_capacity(1);
        style.insert(self.output_key().to_string(), value);
        Ok(style)
    }
}

/// Resolve a single literal against `theme_key`.
///
/// Without a theme key the value passes through untouched. With one, the
/// value names an entry of that category; computed entries are invoked with
/// the raw value. `null` is passed through without a lookup.
pub fn theme_value(
    value: &Value,
    theme_key: Option<&str>,
    ctx: RenderContext<'_>,
) -> Result<Value, StyleError> {
    let Some(theme_key) = theme_key else {
        return Ok(value.clone());
    };
    if value.is_null() {
        return Ok(Value::Null);
    }

    let entry = lookup_key(value).and_then(|key| ctx.theme.lookup(theme_key, &key));
    match entry {
        Some(entry) => {
            tracing::trace!("theme['{}'][{}] resolved", theme_key, value);
            Ok(entry.resolve(ThemeValueParams {
                value,
                theme: ctx.theme,
                dimensions: ctx.dimensions,
            }))
        }
        None => {
            tracing::debug!("theme['{}'] has no entry for {}", theme_key, value);
            Err(StyleError::theme_key_not_found(theme_key, value))
        }
    }
}

/// Key used to index a theme category; maps and arrays can't be keys.
fn lookup_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // `1.0` must find key "1"; f64's Display drops the trailing `.0`
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Some(f.to_string()),
            _ => Some(n.to_string()),
        },
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
