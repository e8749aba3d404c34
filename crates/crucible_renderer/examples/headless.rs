// Minimal headless run: render one lit cube, composite it, and write the
// final target out as frame.png so the result can be inspected visually.

use crucible_renderer::{
    glam::Vec3, Color, DirectionalLight, GpuContext, Graphics, TextureData, Transform,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    pollster::block_on(async {
        let context = GpuContext::new().await?;
        let mut gfx = Graphics::new(context, WIDTH, HEIGHT, wgpu::TextureFormat::Rgba8Unorm);

        // the "default framebuffer" for this run: a plain offscreen texture
        let target = gfx.context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Final Target"),
            size: wgpu::Extent3d {
                width: WIDTH,
                height: HEIGHT,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        // one checkerboard-ish texture, one cube, one light
        let mut pixels = Vec::with_capacity((8 * 8 * 4) as usize);
        for y in 0..8u32 {
            for x in 0..8u32 {
                let on = (x + y) % 2 == 0;
                pixels.extend(if on {
                    [230u8, 230, 230, 255]
                } else {
                    [60u8, 60, 180, 255]
                });
            }
        }
        let texture = gfx.create_texture(&TextureData::from_pixels(8, 8, pixels));

        gfx.set_view_transform(Transform::looking_at(
            Vec3::new(2.5, 2.0, 4.0),
            Vec3::ZERO,
            Vec3::Y,
        ));
        let cube = gfx.cube_mesh().clone();
        let mut cube_transform = Transform::IDENTITY;
        cube_transform.rotate_y(0.6);
        gfx.submit_draw(&cube, &texture, cube_transform)?;
        gfx.submit_light(DirectionalLight::new(
            Vec3::new(-0.4, -1.0, -0.6),
            Color::WHITE,
        ))?;

        let mut encoder = gfx.begin_frame();
        gfx.render(&mut encoder, &target_view);

        // read the final target back; rows must be aligned for the copy
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let bytes_per_row = (4 * WIDTH).div_ceil(align) * align;
        let readback = gfx.context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback Buffer"),
            size: bytes_per_row as u64 * HEIGHT as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(bytes_per_row),
                    rows_per_image: None,
                },
            },
            wgpu::Extent3d {
                width: WIDTH,
                height: HEIGHT,
                depth_or_array_layers: 1,
            },
        );
        gfx.context.queue.submit(std::iter::once(encoder.finish()));

        let slice = readback.slice(..);
        slice.map_async(wgpu::MapMode::Read, |_| {});
        gfx.context.device.poll(wgpu::Maintain::Wait);
        let data = slice.get_mapped_range();

        // strip the row padding
        let mut png_data = Vec::with_capacity((4 * WIDTH * HEIGHT) as usize);
        for row in 0..HEIGHT as usize {
            let start = row * bytes_per_row as usize;
            png_data.extend_from_slice(&data[start..start + (4 * WIDTH) as usize]);
        }
        image::save_buffer("frame.png", &png_data, WIDTH, HEIGHT, image::ColorType::Rgba8)?;

        println!("rendered one frame to frame.png");
        Ok(())
    })
}
