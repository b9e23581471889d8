pub mod engine;
pub mod hook;

pub use engine::format_unit;
pub use hook::{browser_target, use_countdown};
