use wave_lib::*;
use std::time::{Duration, Instant};

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

const TICK_DELAY: Duration = Duration::new(0, 100000000);

async fn run(event_loop: EventLoop<()>, window: Window) {
    let mut render_state = RenderState::new(&window).await;
    let mut animation = Animation::new(DEFAULT_INDICATOR_COUNT, Params::default());
    let mut wave_renderer = WaveRenderer::new(
        &render_state.device,
        &render_state.general_bind_group_layout,
        render_state.swapchain_format,
        &animation,
    );
    let mut controls = ControlPanel::new(
        &event_loop,
        &render_state.device,
        render_state.swapchain_format,
    );

    let mut last_draw = Instant::now();
    let mut since_last_tick = Duration::ZERO;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                if controls.on_event(&event) {
                    window.request_redraw();
                    return;
                }
                match event {
                    WindowEvent::Resized(size) => {
                        render_state.reconfigure(size.width, size.height);
                        window.request_redraw();
                    }
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    _ => {}
                }
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                since_last_tick += now - last_draw;
                last_draw = now;

                // A tick every fixed wall-clock period; a no-op while paused.
                if since_last_tick >= TICK_DELAY {
                    since_last_tick = Duration::ZERO;
                    animation.tick();
                }

                let frame = render_state
                    .surface
                    .get_current_texture()
                    .expect("Failed to acquire next swap chain texture");

                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                render_state.set_projection(scene_projection(
                    render_state.config.width,
                    render_state.config.height,
                ));
                wave_renderer.update(&render_state.queue, &animation);

                let mut encoder = render_state
                    .device
                    .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
                {
                    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: None,
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                                store: true,
                            },
                        })],
                        depth_stencil_attachment: None,
                    });

                    rpass.set_bind_group(0, &render_state.general_bind_group, &[]);
                    wave_renderer.draw(&mut rpass);
                }

                controls.draw(
                    &window,
                    &render_state.device,
                    &render_state.queue,
                    &render_state.config,
                    &mut encoder,
                    &view,
                    &mut animation,
                );

                render_state.queue.submit(Some(encoder.finish()));
                frame.present();

                window.request_redraw();
            }
            _ => {}
        }
    });
}

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Rotational wave")
        .with_inner_size(LogicalSize::new(1100., 440.))
        .build(&event_loop)
        .expect("Failed to create window");
    pollster::block_on(run(event_loop, window));
}
