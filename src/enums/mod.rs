pub mod model_label;
pub mod platform_kind;
