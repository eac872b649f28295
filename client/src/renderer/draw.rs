use wgpu::*;

use super::resources::InstanceBuffer;
use super::scene::Frame;
use super::Renderer;
use crate::mesh::Mesh;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> anyhow::Result<()> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame, the next one draws to the fresh surface
            log::debug!("Surface lost or outdated, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Timed out waiting for surface texture");
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to get current texture: {e}")),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    update_buffers(renderer, frame);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(frame.clear),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, frame: &Frame) {
    let device = &renderer.device;
    let queue = &renderer.queue;
    renderer.buffers.rects.write(device, queue, &frame.rects);
    renderer.buffers.ellipses.write(device, queue, &frame.ellipses);
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Paddles, centre line and score digits
    draw_instanced(pass, &renderer.meshes.0, &renderer.buffers.rects);
    // Ball
    draw_instanced(pass, &renderer.meshes.1, &renderer.buffers.ellipses);
}

fn draw_instanced(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &InstanceBuffer) {
    if instances.len == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.buffer.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..instances.len);
}
