use std::sync::Arc;

use anyhow::Context;
use wgpu::*;
use winit::window::Window;

/// Everything the renderer needs from the GPU, bound to one window
pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

pub async fn init_wgpu(window: Arc<Window>) -> anyhow::Result<WgpuContext> {
    let physical = window.inner_size();
    let size = (physical.width.max(1), physical.height.max(1));

    let instance = Instance::default();
    let surface = instance
        .create_surface(window)
        .context("Failed to create surface")?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .context("No GPU adapter can present to this window")?;
    let info = adapter.get_info();
    log::info!("Using adapter: {} ({:?})", info.name, info.backend);

    let descriptor = DeviceDescriptor {
        label: Some("Pong Device"),
        required_features: Features::empty(),
        required_limits: Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
        memory_hints: MemoryHints::Performance,
    };
    let (device, queue) = adapter
        .request_device(&descriptor, None)
        .await
        .context("Failed to create device")?;

    let caps = surface.get_capabilities(&adapter);
    let format = preferred_format(&caps.formats).context("Surface reports no formats")?;
    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.0,
        height: size.1,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}

/// First sRGB format, else whatever the surface lists first
fn preferred_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_srgb() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(preferred_format(&formats), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn test_falls_back_to_first_format() {
        let formats = [TextureFormat::Rgba16Float, TextureFormat::Bgra8Unorm];
        assert_eq!(preferred_format(&formats), Some(TextureFormat::Rgba16Float));
        assert_eq!(preferred_format(&[]), None);
    }
}
