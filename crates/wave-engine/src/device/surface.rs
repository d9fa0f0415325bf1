use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Sample counts wgpu accepts for render attachments, highest first.
const SAMPLE_COUNTS: [u32; 5] = [16, 8, 4, 2, 1];

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if caps.formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(caps.formats[0])
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Picks the highest supported sample count not above `requested`.
///
/// A count of 1 is always supported.
pub(crate) fn choose_sample_count(requested: u32, is_supported: impl Fn(u32) -> bool) -> u32 {
    SAMPLE_COUNTS
        .into_iter()
        .filter(|&c| c <= requested.max(1))
        .find(|&c| c == 1 || is_supported(c))
        .unwrap_or(1)
}

pub(crate) fn create_msaa_view(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
) -> Option<wgpu::TextureView> {
    if sample_count <= 1 || config.width == 0 || config.height == 0 {
        return None;
    }

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("wave msaa color"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: config.format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    Some(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}

/// Applies a new size to the surface configuration.
///
/// wgpu does not support configuring a surface with a 0x0 size; in that case,
/// only `size` is updated and configuration is deferred. Returns `true` when
/// the surface was reconfigured.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
    true
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_falls_back_to_highest_supported() {
        let only_four = |c: u32| c == 4;
        assert_eq!(choose_sample_count(16, only_four), 4);
        assert_eq!(choose_sample_count(8, |c| c == 4 || c == 8), 8);
        assert_eq!(choose_sample_count(16, |c| c <= 16), 16);
    }

    #[test]
    fn sample_count_never_exceeds_request() {
        assert_eq!(choose_sample_count(2, |_| true), 2);
        assert_eq!(choose_sample_count(3, |_| true), 2);
        assert_eq!(choose_sample_count(1, |_| true), 1);
    }

    #[test]
    fn unsupported_multisampling_disables_it() {
        assert_eq!(choose_sample_count(16, |_| false), 1);
        assert_eq!(choose_sample_count(0, |_| true), 1);
    }
}
