pub mod context;
pub mod listener;
pub mod storage;
pub mod style;
