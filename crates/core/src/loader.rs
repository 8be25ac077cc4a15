use crate::theme::Theme;

/// 从 JSON 字符串加载主题
///
/// 除 `breakpoints` 外，每个顶层键都是一个静态值分类。
/// 计算型条目可在加载后通过 [`Theme::set_fn`] 添加。
///
/// JSON 格式示例：
/// ```json
/// {
///   "spacing": { "s": 8, "m": 16 },
///   "opacities": { "invisible": 0 },
///   "breakpoints": {
///     "phone": 0,
///     "landscape": { "width": 700, "height": 300 }
///   }
/// }
/// ```
pub fn load_theme_from_json(json_str: &str) -> Result<Theme, serde_json::Error> {
    serde_json::from_str(json_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Breakpoint;

    #[test]
    fn test_load_theme_from_json_basic() {
        let json = r#"{
            "spacing": { "s": 8, "m": 16 },
            "breakpoints": { "phone": 0, "tablet": 768 }
        }"#;

        let theme = load_theme_from_json(json).unwrap();

        assert_eq!(theme.category("spacing").map(|c| c.len()), Some(2));
        assert_eq!(theme.breakpoint("tablet"), Some(Breakpoint::Width(768.0)));
    }

    #[test]
    fn test_load_theme_without_breakpoints() {
        let theme = load_theme_from_json(r#"{ "colors": { "primary": "blue" } }"#).unwrap();
        assert!(theme.breakpoints().is_empty());
        assert!(theme.lookup("colors", "primary").is_some());
    }

    #[test]
    fn test_load_theme_invalid() {
        assert!(load_theme_from_json("invalid json").is_err());
        // 分类必须是对象
        assert!(load_theme_from_json(r#"{ "spacing": 4 }"#).is_err());
    }
}
