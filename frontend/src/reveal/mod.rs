pub mod animation;
pub mod components;
pub mod latch;
pub mod observer;

pub use animation::{Animation, Easing, Stagger};
pub use components::{InViewReveal, Reveal};
pub use latch::RevealConfig;
pub use observer::{use_in_view, use_mounted};
