pub mod canvas;
pub mod randomizer;
pub mod window;
pub mod winit_host;
