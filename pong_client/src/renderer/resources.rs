use wgpu::util::DeviceExt;
use wgpu::*;

use crate::canvas::Canvas;

/// GPU copy of the CPU canvas
pub struct FrameTexture {
    pub texture: Texture,
    pub view: TextureView,
    pub sampler: Sampler,
    pub size: Extent3d,
}

pub fn create_frame_texture(device: &Device, width: u32, height: u32) -> FrameTexture {
    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Frame Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let view = texture.create_view(&TextureViewDescriptor::default());

    // Nearest keeps pixel edges hard when the window is scaled
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: Some("Frame Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    });

    FrameTexture {
        texture,
        view,
        sampler,
        size,
    }
}

/// Clip-space quad as a 4-vertex strip: position xy, uv
pub fn create_quad(device: &Device) -> Buffer {
    let vertices: [f32; 16] = [
        -1.0, -1.0, 0.0, 1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0,
    ];
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Quad Vertex Buffer"),
        contents: bytemuck::cast_slice(&vertices),
        usage: BufferUsages::VERTEX,
    })
}

pub fn upload_canvas(queue: &Queue, frame: &FrameTexture, canvas: &Canvas) {
    queue.write_texture(
        TexelCopyTextureInfo {
            texture: &frame.texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        canvas.as_bytes(),
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * canvas.width()),
            rows_per_image: Some(canvas.height()),
        },
        frame.size,
    );
}
