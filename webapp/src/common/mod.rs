pub mod reveal;
pub mod storage;
pub mod style;
pub mod theme;
