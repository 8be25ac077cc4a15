//! Error types for building and applying style functions.

use serde_json::Value;

/// Errors raised by the style function factory and resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A `themeKey`-qualified lookup missed.
    ///
    /// Raised when the category is missing, the key is missing from it, or
    /// the raw value cannot act as a key at all.
    #[error("Value '{value}' does not exist in theme['{theme_key}']")]
    ThemeKeyNotFound { theme_key: String, value: String },

    /// A style function was configured without a property name.
    #[error("Style function property must not be empty")]
    EmptyProperty,
}

impl StyleError {
    /// Create a theme-key-not-found error for a raw prop value.
    pub fn theme_key_not_found(theme_key: impl Into<String>, value: &Value) -> Self {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self::ThemeKeyNotFound {
            theme_key: theme_key.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_mentions_category_and_value() {
        let err = StyleError::theme_key_not_found("opacities", &json!("veryVisible"));
        assert_eq!(
            err.to_string(),
            "Value 'veryVisible' does not exist in theme['opacities']"
        );
    }

    #[test]
    fn test_non_string_values_are_rendered_as_json() {
        let err = StyleError::theme_key_not_found("zIndices", &json!(3));
        assert!(err.to_string().contains("Value '3'"));
    }
}
