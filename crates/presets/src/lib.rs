pub mod catalog;

// 重新导出主要 API
pub use catalog::{all_presets, preset, preset_config, preset_function, preset_names, Preset};
