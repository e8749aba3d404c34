//! End-to-end frame behavior against a real (headless) device.
//!
//! Every test bails out quietly when the machine has no GPU adapter, so the
//! suite stays green on bare CI runners.

use crucible_renderer::{
    glam::Vec3, Color, DirectionalLight, GpuContext, Graphics, RenderError, TextureData,
    Transform, MAX_LIGHTS, MAX_RENDER_COMMANDS,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

fn graphics() -> Option<Graphics> {
    let context = pollster::block_on(GpuContext::new()).ok()?;
    Some(Graphics::new(context, WIDTH, HEIGHT, TARGET_FORMAT))
}

/// A texture standing in for "the currently bound default framebuffer".
fn target_texture(gfx: &Graphics) -> wgpu::Texture {
    gfx.context.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Test Target"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TARGET_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    })
}

fn target_view(gfx: &Graphics) -> wgpu::TextureView {
    target_texture(gfx).create_view(&wgpu::TextureViewDescriptor::default())
}

/// Reads the target back as tightly packed RGBA8 rows.
fn read_pixels(gfx: &Graphics, texture: &wgpu::Texture) -> Vec<u8> {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let bytes_per_row = (4 * WIDTH).div_ceil(align) * align;
    let buffer = gfx.context.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Readback Buffer"),
        size: bytes_per_row as u64 * HEIGHT as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = gfx.begin_frame();
    encoder.copy_texture_to_buffer(
        wgpu::ImageCopyTexture {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::ImageCopyBuffer {
            buffer: &buffer,
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

    let slice = buffer.slice(..);
    slice.map_async(wgpu::MapMode::Read, |_| {});
    gfx.context.device.poll(wgpu::Maintain::Wait);
    let data = slice.get_mapped_range();

    let mut pixels = Vec::with_capacity((4 * WIDTH * HEIGHT) as usize);
    for row in 0..HEIGHT as usize {
        let start = row * bytes_per_row as usize;
        pixels.extend_from_slice(&data[start..start + (4 * WIDTH) as usize]);
    }
    pixels
}

fn to_rgba8(color: Color) -> [u8; 4] {
    color.to_array().map(|c| (c * 255.0).round() as u8)
}

#[test]
fn queues_reset_after_render() {
    let Some(mut gfx) = graphics() else { return };
    let texture = gfx.create_texture(&TextureData::solid(1, 1, [255, 255, 255, 255]));
    let cube = gfx.cube_mesh().clone();

    for i in 0..10 {
        gfx.submit_draw(
            &cube,
            &texture,
            Transform::from_position(Vec3::new(i as f32, 0.0, -5.0)),
        )
        .unwrap();
    }
    gfx.submit_light(DirectionalLight::overhead()).unwrap();
    assert_eq!(gfx.pending_draws(), 10);
    assert_eq!(gfx.pending_lights(), 1);

    let view = target_view(&gfx);
    gfx.render_frame(&view);

    assert_eq!(gfx.pending_draws(), 0);
    assert_eq!(gfx.pending_lights(), 0);
}

#[test]
fn command_queue_overflow_is_an_error_not_a_panic() {
    let Some(mut gfx) = graphics() else { return };
    let texture = gfx.create_texture(&TextureData::solid(1, 1, [128, 128, 128, 255]));
    let cube = gfx.cube_mesh().clone();

    for _ in 0..MAX_RENDER_COMMANDS {
        gfx.submit_draw(&cube, &texture, Transform::IDENTITY).unwrap();
    }
    let overflow = gfx.submit_draw(&cube, &texture, Transform::IDENTITY);
    assert!(matches!(overflow, Err(RenderError::CommandQueueFull(_))));
    assert_eq!(gfx.pending_draws(), MAX_RENDER_COMMANDS);

    // a render drains the queue and makes room again
    let view = target_view(&gfx);
    gfx.render_frame(&view);
    gfx.submit_draw(&cube, &texture, Transform::IDENTITY).unwrap();
}

#[test]
fn light_queue_overflow_is_an_error_not_a_panic() {
    let Some(mut gfx) = graphics() else { return };

    for _ in 0..MAX_LIGHTS {
        gfx.submit_light(DirectionalLight::overhead()).unwrap();
    }
    let overflow = gfx.submit_light(DirectionalLight::overhead());
    assert!(matches!(overflow, Err(RenderError::LightQueueFull(_))));
    assert_eq!(gfx.pending_lights(), MAX_LIGHTS);
}

#[test]
fn projection_never_changes_across_renders() {
    let Some(mut gfx) = graphics() else { return };
    let before = gfx.projection();

    let view = target_view(&gfx);
    gfx.render_frame(&view);
    gfx.set_view_transform(Transform::from_position(Vec3::new(0.0, 10.0, 0.0)));
    gfx.render_frame(&view);

    assert_eq!(before, gfx.projection());
}

#[test]
fn empty_renders_are_idempotent() {
    let Some(mut gfx) = graphics() else { return };
    let view = target_view(&gfx);

    // two frames with no submissions: nothing queued before or after either
    for _ in 0..2 {
        assert_eq!(gfx.pending_draws(), 0);
        gfx.render_frame(&view);
        assert_eq!(gfx.pending_draws(), 0);
        assert_eq!(gfx.pending_lights(), 0);
    }
}

#[test]
fn composite_blit_covers_clear_marker() {
    let Some(mut gfx) = graphics() else { return };
    // the marker would be visible if the quad missed any pixel
    assert_eq!(gfx.composite_clear_color(), Color::MAGENTA);

    let target = target_texture(&gfx);
    let view = target.create_view(&wgpu::TextureViewDescriptor::default());
    gfx.render_frame(&view);

    // an empty frame blits the bare offscreen background over every pixel,
    // so nothing of the magenta clear survives
    let background = to_rgba8(gfx.world_clear_color());
    let pixels = read_pixels(&gfx, &target);
    for px in pixels.chunks_exact(4) {
        for (got, want) in px.iter().zip(background) {
            assert!(
                (*got as i16 - want as i16).abs() <= 1,
                "pixel {px:?} is not the offscreen background {background:?}"
            );
        }
    }
}

#[test]
fn single_cube_end_to_end() {
    let Some(mut gfx) = graphics() else { return };
    let texture = gfx.create_texture(&TextureData::solid(4, 4, [200, 60, 60, 255]));
    let cube = gfx.cube_mesh().clone();

    gfx.set_view_transform(Transform::looking_at(
        Vec3::new(0.0, 0.0, 6.0),
        Vec3::ZERO,
        Vec3::Y,
    ));
    gfx.submit_draw(&cube, &texture, Transform::IDENTITY).unwrap();
    gfx.submit_light(DirectionalLight::new(
        Vec3::new(-0.5, -1.0, -0.5),
        Color::WHITE,
    ))
    .unwrap();

    let target = target_texture(&gfx);
    let view = target.create_view(&wgpu::TextureViewDescriptor::default());
    gfx.render_frame(&view);

    assert_eq!(gfx.pending_draws(), 0);
    assert_eq!(gfx.pending_lights(), 0);

    // the cube faces the camera dead-center, so the middle of the composited
    // frame shows lit geometry rather than the clear color
    let pixels = read_pixels(&gfx, &target);
    let center = ((HEIGHT / 2 * WIDTH + WIDTH / 2) * 4) as usize;
    let background = to_rgba8(gfx.world_clear_color());
    assert_ne!(&pixels[center..center + 3], &background[..3]);
}
