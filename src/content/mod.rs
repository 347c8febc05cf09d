pub mod entry;
pub mod level;
pub mod library;
