pub mod exercise;
pub mod food;
