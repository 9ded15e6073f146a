pub mod theme;
pub mod title;
