pub mod components;
pub mod tasks;

pub use tasks::render;
