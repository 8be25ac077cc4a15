use phf::phf_map;
use serde_json::{json, Value};
use std::fmt;
use tidestyle_core::{StyleError, StyleFunction, StyleFunctionConfig, TransformParams};

/// 常用属性的预设样式函数描述
#[derive(Clone, Copy)]
pub struct Preset {
    /// 输出到样式对象中的键
    pub style_property: &'static str,
    /// 取值所用的主题分类
    pub theme_key: Option<&'static str>,
    pub transform: Option<fn(TransformParams<'_>) -> Value>,
}

impl Preset {
    /// 生成该预设的配置，从输入 props 中读取 `prop`
    pub fn config(&self, prop: &str) -> StyleFunctionConfig {
        let mut config = StyleFunctionConfig::new(prop).style_property(self.style_property);
        if let Some(theme_key) = self.theme_key {
            config = config.theme_key(theme_key);
        }
        if let Some(transform) = self.transform {
            config = config.transform(transform);
        }
        config
    }
}

impl fmt::Debug for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preset")
            .field("style_property", &self.style_property)
            .field("theme_key", &self.theme_key)
            .field("transform", &self.transform.map(|_| "<fn>"))
            .finish()
    }
}

const fn plain(style_property: &'static str) -> Preset {
    Preset {
        style_property,
        theme_key: None,
        transform: None,
    }
}

const fn themed(style_property: &'static str, theme_key: &'static str) -> Preset {
    Preset {
        style_property,
        theme_key: Some(theme_key),
        transform: None,
    }
}

/// `visible: false` 隐藏元素，其余值均显示
fn visible_to_display(params: TransformParams<'_>) -> Value {
    match params.value {
        Value::Bool(false) => json!("none"),
        _ => json!("flex"),
    }
}

/// 属性名到预设的映射
///
/// 使用 phf 在编译期生成完美哈希表，零运行时开销
static PRESETS: phf::Map<&'static str, Preset> = phf_map! {
    // Color (颜色)
    "color" => themed("color", "colors"),
    "backgroundColor" => themed("backgroundColor", "colors"),
    "bg" => themed("backgroundColor", "colors"),

    // Visibility (可见性)
    "opacity" => plain("opacity"),
    "visible" => Preset {
        style_property: "display",
        theme_key: None,
        transform: Some(visible_to_display),
    },

    // Spacing (间距)
    "margin" => themed("margin", "spacing"),
    "marginTop" => themed("marginTop", "spacing"),
    "marginRight" => themed("marginRight", "spacing"),
    "marginBottom" => themed("marginBottom", "spacing"),
    "marginLeft" => themed("marginLeft", "spacing"),
    "marginStart" => themed("marginStart", "spacing"),
    "marginEnd" => themed("marginEnd", "spacing"),
    "marginHorizontal" => themed("marginHorizontal", "spacing"),
    "marginVertical" => themed("marginVertical", "spacing"),
    "padding" => themed("padding", "spacing"),
    "paddingTop" => themed("paddingTop", "spacing"),
    "paddingRight" => themed("paddingRight", "spacing"),
    "paddingBottom" => themed("paddingBottom", "spacing"),
    "paddingLeft" => themed("paddingLeft", "spacing"),
    "paddingStart" => themed("paddingStart", "spacing"),
    "paddingEnd" => themed("paddingEnd", "spacing"),
    "paddingHorizontal" => themed("paddingHorizontal", "spacing"),
    "paddingVertical" => themed("paddingVertical", "spacing"),
    "gap" => themed("gap", "spacing"),
    "rowGap" => themed("rowGap", "spacing"),
    "columnGap" => themed("columnGap", "spacing"),

    // Spacing shorthands (间距简写)
    "m" => themed("margin", "spacing"),
    "mt" => themed("marginTop", "spacing"),
    "mr" => themed("marginRight", "spacing"),
    "mb" => themed("marginBottom", "spacing"),
    "ml" => themed("marginLeft", "spacing"),
    "ms" => themed("marginStart", "spacing"),
    "me" => themed("marginEnd", "spacing"),
    "mx" => themed("marginHorizontal", "spacing"),
    "my" => themed("marginVertical", "spacing"),
    "p" => themed("padding", "spacing"),
    "pt" => themed("paddingTop", "spacing"),
    "pr" => themed("paddingRight", "spacing"),
    "pb" => themed("paddingBottom", "spacing"),
    "pl" => themed("paddingLeft", "spacing"),
    "ps" => themed("paddingStart", "spacing"),
    "pe" => themed("paddingEnd", "spacing"),
    "px" => themed("paddingHorizontal", "spacing"),
    "py" => themed("paddingVertical", "spacing"),
    "g" => themed("gap", "spacing"),
    "rg" => themed("rowGap", "spacing"),
    "cg" => themed("columnGap", "spacing"),

    // Typography (排版)
    "fontFamily" => plain("fontFamily"),
    "fontSize" => plain("fontSize"),
    "fontStyle" => plain("fontStyle"),
    "fontWeight" => plain("fontWeight"),
    "letterSpacing" => plain("letterSpacing"),
    "lineHeight" => plain("lineHeight"),
    "textAlign" => plain("textAlign"),
    "textDecorationLine" => plain("textDecorationLine"),
    "textTransform" => plain("textTransform"),

    // Layout (布局)
    "width" => plain("width"),
    "height" => plain("height"),
    "minWidth" => plain("minWidth"),
    "maxWidth" => plain("maxWidth"),
    "minHeight" => plain("minHeight"),
    "maxHeight" => plain("maxHeight"),
    "overflow" => plain("overflow"),
    "aspectRatio" => plain("aspectRatio"),
    "alignContent" => plain("alignContent"),
    "alignItems" => plain("alignItems"),
    "alignSelf" => plain("alignSelf"),
    "justifyContent" => plain("justifyContent"),
    "flex" => plain("flex"),
    "flexBasis" => plain("flexBasis"),
    "flexDirection" => plain("flexDirection"),
    "flexGrow" => plain("flexGrow"),
    "flexShrink" => plain("flexShrink"),
    "flexWrap" => plain("flexWrap"),

    // Position (定位)
    "position" => plain("position"),
    "top" => plain("top"),
    "right" => plain("right"),
    "bottom" => plain("bottom"),
    "left" => plain("left"),
    "start" => plain("start"),
    "end" => plain("end"),
    "zIndex" => themed("zIndex", "zIndices"),

    // Border (边框)
    "borderWidth" => plain("borderWidth"),
    "borderTopWidth" => plain("borderTopWidth"),
    "borderRightWidth" => plain("borderRightWidth"),
    "borderBottomWidth" => plain("borderBottomWidth"),
    "borderLeftWidth" => plain("borderLeftWidth"),
    "borderStyle" => plain("borderStyle"),
    "borderColor" => themed("borderColor", "colors"),
    "borderTopColor" => themed("borderTopColor", "colors"),
    "borderRightColor" => themed("borderRightColor", "colors"),
    "borderBottomColor" => themed("borderBottomColor", "colors"),
    "borderLeftColor" => themed("borderLeftColor", "colors"),
    "borderRadius" => themed("borderRadius", "borderRadii"),
    "borderTopLeftRadius" => themed("borderTopLeftRadius", "borderRadii"),
    "borderTopRightRadius" => themed("borderTopRightRadius", "borderRadii"),
    "borderBottomLeftRadius" => themed("borderBottomLeftRadius", "borderRadii"),
    "borderBottomRightRadius" => themed("borderBottomRightRadius", "borderRadii"),

    // Shadow (阴影)
    "shadowOpacity" => plain("shadowOpacity"),
    "shadowOffset" => plain("shadowOffset"),
    "shadowRadius" => plain("shadowRadius"),
    "shadowColor" => themed("shadowColor", "colors"),
    "elevation" => plain("elevation"),
    "textShadowOffset" => plain("textShadowOffset"),
    "textShadowRadius" => plain("textShadowRadius"),
    "textShadowColor" => themed("textShadowColor", "colors"),
};

/// 查询属性名对应的预设
pub fn preset(prop: &str) -> Option<&'static Preset> {
    PRESETS.get(prop)
}

pub fn preset_config(prop: &str) -> Option<StyleFunctionConfig> {
    preset(prop).map(|p| p.config(prop))
}

/// 构建已知属性的样式函数
///
/// 未知属性返回 `Ok(None)`；构建失败时原样传出 `StyleError`
pub fn preset_function(prop: &str) -> Result<Option<StyleFunction>, StyleError> {
    preset_config(prop).map(StyleFunction::new).transpose()
}

/// 所有预设属性名（已排序）
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// 构建全部预设样式函数，按属性名排序
pub fn all_presets() -> Result<Vec<StyleFunction>, StyleError> {
    let mut functions = Vec::with_capacity(PRESETS.len());
    for name in preset_names() {
        if let Some(function) = preset_function(name)? {
            functions.push(function);
        }
    }
    Ok(functions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_map() {
        assert_eq!(preset("m").map(|p| p.style_property), Some("margin"));
        assert_eq!(preset("bg").map(|p| p.style_property), Some("backgroundColor"));
        assert_eq!(preset("opacity").and_then(|p| p.theme_key), None);
        assert_eq!(preset("zIndex").and_then(|p| p.theme_key), Some("zIndices"));
        assert!(preset("unknown").is_none());
    }

    #[test]
    fn test_shorthands_match_longhands() {
        let pairs = [
            ("m", "margin"),
            ("mx", "marginHorizontal"),
            ("py", "paddingVertical"),
            ("g", "gap"),
        ];
        for (short, long) in pairs {
            let short = preset(short).unwrap();
            let long = preset(long).unwrap();
            assert_eq!(short.style_property, long.style_property);
            assert_eq!(short.theme_key, long.theme_key);
        }
    }

    #[test]
    fn test_preset_config_reads_the_prop() {
        let config = preset_config("px").unwrap();
        assert_eq!(config.property, "px");
        assert_eq!(config.style_property.as_deref(), Some("paddingHorizontal"));
        assert_eq!(config.theme_key.as_deref(), Some("spacing"));
        assert!(config.transform.is_none());

        assert!(preset_config("visible").unwrap().transform.is_some());
    }

    #[test]
    fn test_preset_function() {
        let func = preset_function("mt").unwrap().unwrap();
        assert_eq!(func.property(), "mt");
        assert_eq!(func.output_key(), "marginTop");
        assert_eq!(func.theme_key(), Some("spacing"));

        assert!(preset_function("unknown").unwrap().is_none());
    }

    #[test]
    fn test_empty_prop_config_is_rejected() {
        let config = preset("m").unwrap().config("");
        assert_eq!(
            StyleFunction::new(config).unwrap_err(),
            StyleError::EmptyProperty
        );
    }

    #[test]
    fn test_all_presets_sorted() {
        let names = preset_names();
        let functions = all_presets().unwrap();
        assert_eq!(functions.len(), names.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(functions[0].property(), names[0]);
    }
}
