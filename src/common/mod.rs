pub mod colors;
pub mod config;
pub mod constants;
pub mod error;
pub mod explorer;
pub mod mandelbrot;
pub mod plane;
pub mod render;
pub mod view;
