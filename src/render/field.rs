use super::helpers::{create_color_texture, create_lut_sampler, make_fullscreen_pipeline};
use crate::core::{FieldUniforms, LutRaster, LUT_WIDTH};
use wgpu;

pub(crate) struct FieldResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) lut_tex: wgpu::Texture,
}

/// Sample the LUT in the same color space the surface encodes to.
pub(crate) fn lut_format_for(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

pub(crate) fn create_field_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
) -> FieldResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("field_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::FIELD_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("field_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("field_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = make_fullscreen_pipeline(device, &pl, &shader, "fs_field", surface_format);

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("field_uniforms"),
        size: std::mem::size_of::<FieldUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let (lut_tex, lut_view) = create_color_texture(
        device,
        "lut_tex",
        LUT_WIDTH as u32,
        1,
        lut_format_for(surface_format),
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    let sampler = create_lut_sampler(device);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("field_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&lut_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });

    FieldResources {
        pipeline,
        uniform_buffer,
        bind_group,
        lut_tex,
    }
}

/// Copy the first row of `raster` into the LUT texture.
pub(crate) fn upload_lut(queue: &wgpu::Queue, lut_tex: &wgpu::Texture, raster: &LutRaster) {
    let width = lut_tex.width().min(raster.width() as u32);
    let row_bytes = width as usize * 4;
    let Some(row) = raster.pixels().get(..row_bytes) else {
        log::warn!("[render] LUT raster too small ({} bytes)", raster.pixels().len());
        return;
    };
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: lut_tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        row,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(row_bytes as u32),
            rows_per_image: Some(1),
        },
        wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        },
    );
}
