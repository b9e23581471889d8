pub mod screen;
pub mod world_map;

pub use screen::LoadingScreen;
