use egui_wgpu::renderer::{RenderPass as EguiRenderPass, ScreenDescriptor};
use wgpu::{CommandEncoder, Device, Queue, SurfaceConfiguration, TextureFormat, TextureView};
use winit::{event::WindowEvent, event_loop::EventLoopWindowTarget, window::Window};

use crate::animation::Animation;

/// The control strip along the bottom of the window: play/pause, reset, the
/// three parameter fields and the step readout. Painted over the scene with
/// egui's wgpu backend.
pub struct ControlPanel {
    context: egui::Context,
    winit_state: egui_winit::State,
    render_pass: EguiRenderPass,
}

impl ControlPanel {
    pub fn new<T>(
        event_loop: &EventLoopWindowTarget<T>,
        device: &Device,
        swapchain_format: TextureFormat,
    ) -> Self {
        Self {
            context: egui::Context::default(),
            winit_state: egui_winit::State::new(event_loop),
            render_pass: EguiRenderPass::new(device, swapchain_format, 1),
        }
    }

    /// Forward a window event to egui. Returns true when egui consumed it.
    pub fn on_event(&mut self, event: &WindowEvent) -> bool {
        self.winit_state.on_event(&self.context, event)
    }

    fn panel(ui: &mut egui::Ui, animation: &mut Animation) {
        ui.horizontal(|ui| {
            let play_label = if animation.is_playing() {
                "Pause"
            } else {
                "Play"
            };
            if ui.button(play_label).clicked() {
                animation.switch();
            }
            if ui.button("Reset").clicked() {
                log::debug!("reset");
                animation.reset();
            }

            ui.separator();

            ui.label("Distance");
            let mut spacing = animation.params().spacing;
            if ui
                .add(
                    egui::DragValue::new(&mut spacing)
                        .speed(0.1)
                        .clamp_range(0.0..=4.0),
                )
                .changed()
            {
                animation.set_spacing(spacing);
            }

            ui.label("Phase");
            let mut phase_step = animation.params().phase_step;
            if ui
                .add(
                    egui::DragValue::new(&mut phase_step)
                        .speed(1.0)
                        .clamp_range(-360.0..=360.0),
                )
                .changed()
            {
                animation.set_phase_step(phase_step);
            }

            ui.label("Rotation velocity (deg/step)");
            let mut rotation_step = animation.params().rotation_step;
            if ui
                .add(
                    egui::DragValue::new(&mut rotation_step)
                        .speed(1.0)
                        .clamp_range(-360.0..=360.0),
                )
                .changed()
            {
                animation.set_rotation_step(rotation_step);
            }

            ui.separator();
            ui.label(animation.counter().display());
        });
    }

    /// Run the ui for this frame and record its paint pass over the scene.
    pub fn draw(
        &mut self,
        window: &Window,
        device: &Device,
        queue: &Queue,
        config: &SurfaceConfiguration,
        encoder: &mut CommandEncoder,
        view: &TextureView,
        animation: &mut Animation,
    ) {
        let raw_input = self.winit_state.take_egui_input(window);
        let full_output = self.context.run(raw_input, |ctx| {
            egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
                Self::panel(ui, animation);
            });
        });

        self.winit_state
            .handle_platform_output(window, &self.context, full_output.platform_output);

        let paint_jobs = self.context.tessellate(full_output.shapes);
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [config.width, config.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.render_pass
                .update_texture(device, queue, *id, image_delta);
        }
        self.render_pass
            .update_buffers(device, queue, &paint_jobs, &screen_descriptor);
        self.render_pass
            .execute(encoder, view, &paint_jobs, &screen_descriptor, None);
        for id in &full_output.textures_delta.free {
            self.render_pass.free_texture(id);
        }
    }
}
