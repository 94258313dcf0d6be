pub mod buffer;
pub mod color;
pub mod config;
pub mod quality;
