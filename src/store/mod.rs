pub mod files;

pub use files::{TaskStore, next_id};
