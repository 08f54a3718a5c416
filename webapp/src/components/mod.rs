pub mod fallback;
pub mod footer;
pub mod glass;
pub mod image;
pub mod navigation;
pub mod reveal;
pub mod tags;
