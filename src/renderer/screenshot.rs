//! Read a rendered frame back from the GPU and save it as binary PPM.

use std::{io::Write, path::Path, sync::mpsc};

use super::SceneRenderer;
use crate::{
    engine::core::RenderSnapshot,
    error::SkyviewError,
    gpu::{render_context::RenderContext, texture::RenderTarget},
};

/// An 8-bit RGB image, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes.
    pub rgb: Vec<u8>,
}

impl Image {
    /// Encode as binary PPM (`P6`, max value 255).
    #[must_use]
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.rgb.len());
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(&self.rgb);
        out
    }

    /// Write as binary PPM.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::Io`] if the file cannot be written.
    pub fn save_ppm(&self, path: &Path) -> Result<(), SkyviewError> {
        let mut file = std::fs::File::create(path)?;
        file.write_all(&self.to_ppm())?;
        Ok(())
    }
}

/// Bytes per row of a `width`-pixel RGBA8 copy, rounded up to wgpu's copy
/// alignment.
#[must_use]
pub const fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Byte offsets of red, green and blue within a texel of `format`.
fn channel_order(
    format: wgpu::TextureFormat,
) -> Result<[usize; 3], SkyviewError> {
    match format {
        wgpu::TextureFormat::Rgba8Unorm
        | wgpu::TextureFormat::Rgba8UnormSrgb => Ok([0, 1, 2]),
        wgpu::TextureFormat::Bgra8Unorm
        | wgpu::TextureFormat::Bgra8UnormSrgb => Ok([2, 1, 0]),
        other => Err(SkyviewError::Screenshot(format!(
            "unsupported capture format {other:?}"
        ))),
    }
}

/// Strip row padding and reorder 4-byte texels of `format` into RGB.
///
/// # Errors
///
/// Returns [`SkyviewError::Screenshot`] for formats other than 8-bit RGBA
/// or BGRA, or if `padded` is too short.
pub fn unpad_to_rgb(
    padded: &[u8],
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
) -> Result<Vec<u8>, SkyviewError> {
    let [r, g, b] = channel_order(format)?;
    let stride = padded_bytes_per_row(width) as usize;
    let row_bytes = width as usize * 4;
    if padded.len() < stride * height as usize {
        return Err(SkyviewError::Screenshot(format!(
            "read-back buffer holds {} bytes, expected {}",
            padded.len(),
            stride * height as usize
        )));
    }

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for row in padded.chunks_exact(stride).take(height as usize) {
        for texel in row[..row_bytes].chunks_exact(4) {
            rgb.extend_from_slice(&[texel[r], texel[g], texel[b]]);
        }
    }
    Ok(rgb)
}

/// Render `snapshot` off-screen at the context's size and read it back.
///
/// Blocks until the GPU copy completes.
///
/// # Errors
///
/// Returns [`SkyviewError::Screenshot`] if the buffer cannot be mapped or
/// the colour format cannot be converted.
pub fn capture(
    context: &RenderContext,
    renderer: &SceneRenderer,
    snapshot: &RenderSnapshot,
) -> Result<Image, SkyviewError> {
    let (width, height) = (context.width(), context.height());
    let format = context.format();
    let target = RenderTarget::new(&context.device, width, height, format);

    renderer.prepare(&context.queue, snapshot);
    let mut encoder = context.create_encoder("Screenshot Encoder");
    renderer.encode(&mut encoder, &target.view);

    let bytes_per_row = padded_bytes_per_row(width);
    let buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Screenshot Buffer"),
        size: u64::from(bytes_per_row) * u64::from(height),
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture: &target.texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    context.submit(encoder);

    let slice = buffer.slice(..);
    let (tx, rx) = mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = tx.send(result);
    });
    let _ = context
        .device
        .poll(wgpu::PollType::Wait)
        .map_err(|e| SkyviewError::Screenshot(e.to_string()))?;
    rx.recv()
        .map_err(|e| SkyviewError::Screenshot(e.to_string()))?
        .map_err(|e| SkyviewError::Screenshot(e.to_string()))?;

    let rgb = {
        let mapped = slice.get_mapped_range();
        unpad_to_rgb(&mapped, width, height, format)?
    };
    buffer.unmap();

    Ok(Image { width, height, rgb })
}
