use crate::theme::Theme;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use serde_json::Value;

/// 输入：逻辑样式属性名 → 字面值或断点映射
pub type Props = serde_json::Map<String, Value>;

/// 输出：样式键 → 解析后的值
///
/// 使用 IndexMap，合并后保持稳定的键顺序
pub type StyleObject = IndexMap<String, Value>;

/// 视口尺寸
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 单次解析上下文
///
/// 每次 `apply` 都重新传入，只读不写
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub dimensions: Dimensions,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, dimensions: Dimensions) -> Self {
        Self { theme, dimensions }
    }
}

/// 计算型主题条目的参数
#[derive(Debug, Clone, Copy)]
pub struct ThemeValueParams<'a> {
    /// 查找条目时使用的原始主题键（如 `"md"`）
    pub value: &'a Value,
    pub theme: &'a Theme,
    pub dimensions: Dimensions,
}

/// 样式函数 transform 的参数
#[derive(Debug, Clone, Copy)]
pub struct TransformParams<'a> {
    /// 主题查找后的值
    pub value: &'a Value,
    pub theme: &'a Theme,
    pub dimensions: Dimensions,
    /// 样式函数配置的主题分类（可选）
    pub theme_key: Option<&'a str>,
}
