use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from scene entities.
/// Every entity gets an instance so host nodes can be looked up by index;
/// inactive ones are marked invisible rather than skipped.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for entity in entities {
        let pushed = buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            spin: entity.spin,
            scale: entity.scale,
            entity_id: entity.id.as_f32(),
            visible: if entity.active { 1.0 } else { 0.0 },
            _pad: 0.0,
        });
        if !pushed {
            log::warn!("render buffer full, {} dropped", entity.tag);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec3;

    #[test]
    fn instances_follow_scene_order() {
        let mut a = Entity::new(EntityId(1)).with_pos(Vec3::new(1.0, 2.0, 3.0)).with_spin(0.5);
        let b = Entity::new(EntityId(2)).with_scale(2.0);
        a.active = false;
        let entities = [a, b];

        let mut buffer = RenderBuffer::with_capacity(8);
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let first = buffer.instances[0];
        assert_eq!((first.x, first.y, first.z, first.spin), (1.0, 2.0, 3.0, 0.5));
        assert_eq!(first.entity_id, 1.0);
        assert_eq!(first.visible, 0.0);
        assert_eq!(buffer.instances[1].scale, 2.0);
        assert_eq!(buffer.instances[1].visible, 1.0);
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let entities = [Entity::new(EntityId(1))];
        let mut buffer = RenderBuffer::with_capacity(8);
        build_render_buffer(entities.iter(), &mut buffer);
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
