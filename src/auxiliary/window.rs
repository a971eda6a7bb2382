use anyhow::{anyhow, Result};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Open a window whose logical inner size matches the viewport.
///
/// Returns the window, its physical width and height, and the scale factor.
pub fn create_window(
    title: &str,
    width: u32,
    height: u32,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64)> {
    let size = LogicalSize::new(width as f64, height as f64);
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(size)
        .with_min_inner_size(size)
        .build(event_loop)
        .map_err(|e| anyhow!("failed to create window: {}", e))?;

    let hidpi_factor = window.scale_factor();
    let physical = size.to_physical::<f64>(hidpi_factor);

    Ok((
        window,
        physical.width.round() as u32,
        physical.height.round() as u32,
        hidpi_factor,
    ))
}
