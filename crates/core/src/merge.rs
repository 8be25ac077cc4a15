use crate::types::StyleObject;

/// 浅合并多个局部样式对象
///
/// 功能：
/// - 同名键后者覆盖前者
/// - 保持稳定输出顺序（使用 IndexMap，键位置以首次插入为准）
///
/// 样式函数本身不做合并，由调用方组合多个函数的输出
pub fn merge_styles<I>(styles: I) -> StyleObject
where
    I: IntoIterator<Item = StyleObject>,
{
    let mut merged = StyleObject::new();

    for style in styles {
        merged.extend(style);
    }

    merged
}
