pub mod error;
pub mod loader;
pub mod merge;
pub mod style_function;
pub mod theme;
pub mod types;
pub mod value;

// 重新导出常用类型
pub use error::StyleError;
pub use loader::load_theme_from_json;
pub use merge::merge_styles;
pub use style_function::{theme_value, StyleFunction, StyleFunctionConfig, TransformFn};
pub use theme::{Breakpoint, Theme, ThemeEntry, ThemeValueFn};
pub use types::{
    Dimensions, Props, RenderContext, StyleObject, ThemeValueParams, TransformParams, Value,
};
pub use value::{classify_value, value_for_screen_size, RawValue};
