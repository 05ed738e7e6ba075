/// Pointer interaction: picks → tooltip and focus effects.
///
/// The host does the ray casting and hands over hit entity ids, nearest
/// first. Resolution walks that list and takes the first id registered as a
/// body, so guides and decorations in front of a planet are skipped by
/// identity, not by depth.

use std::collections::HashMap;

use glam::Vec2;
use orrery_engine::{EntityId, PointerPos};

use crate::bodies::BodyId;

/// Tooltip offset from the pointer, in client pixels.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, -10.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEffect {
    ShowInfo { body: BodyId, entity: EntityId, at: Vec2 },
    HideInfo,
    Focus { body: BodyId, entity: EntityId },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionResolver {
    bodies: HashMap<EntityId, BodyId>,
    tooltip_visible: bool,
}

impl InteractionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `entity` resolve to `body`.
    pub fn register(&mut self, entity: EntityId, body: BodyId) {
        self.bodies.insert(entity, body);
    }

    /// First hit that is a known body.
    pub fn resolve(&self, hits: &[EntityId]) -> Option<(EntityId, BodyId)> {
        hits.iter()
            .find_map(|id| self.bodies.get(id).map(|body| (*id, *body)))
    }

    /// Show the tooltip over a body, or hide it. Returns `None` when a hide
    /// would not change anything. Tooltip state only changes through
    /// `set_tooltip_visible`, once the effect has reached the host.
    pub fn pointer_move(&self, pos: &PointerPos, hits: &[EntityId]) -> Option<InteractionEffect> {
        match self.resolve(hits) {
            Some((entity, body)) => Some(InteractionEffect::ShowInfo {
                body,
                entity,
                at: pos.client + TOOLTIP_OFFSET,
            }),
            None if self.tooltip_visible => Some(InteractionEffect::HideInfo),
            None => None,
        }
    }

    pub fn set_tooltip_visible(&mut self, visible: bool) {
        self.tooltip_visible = visible;
    }

    /// Focus on the clicked body, if any. Tooltip state is unaffected.
    pub fn pointer_click(&self, hits: &[EntityId]) -> Option<InteractionEffect> {
        self.resolve(hits)
            .map(|(entity, body)| InteractionEffect::Focus { body, entity })
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> InteractionResolver {
        let mut r = InteractionResolver::new();
        r.register(EntityId(10), BodyId(0));
        r.register(EntityId(11), BodyId(1));
        r
    }

    fn at(x: f32, y: f32) -> PointerPos {
        PointerPos::from_coords(0.0, 0.0, x, y)
    }

    #[test]
    fn nearest_body_wins() {
        let r = resolver();
        assert_eq!(r.resolve(&[EntityId(11), EntityId(10)]), Some((EntityId(11), BodyId(1))));
    }

    #[test]
    fn non_body_hits_are_skipped() {
        let r = resolver();
        // 3 = an orbit guide, 4 = a ring decoration
        assert_eq!(
            r.resolve(&[EntityId(3), EntityId(4), EntityId(10)]),
            Some((EntityId(10), BodyId(0)))
        );
        assert_eq!(r.resolve(&[EntityId(3)]), None);
        assert_eq!(r.resolve(&[]), None);
    }

    #[test]
    fn hover_shows_tooltip_offset_from_pointer() {
        let r = resolver();
        let effect = r.pointer_move(&at(100.0, 200.0), &[EntityId(10)]);
        assert_eq!(
            effect,
            Some(InteractionEffect::ShowInfo {
                body: BodyId(0),
                entity: EntityId(10),
                at: Vec2::new(110.0, 190.0),
            })
        );
        assert!(!r.tooltip_visible());
    }

    #[test]
    fn hide_is_idempotent() {
        let mut r = resolver();
        assert_eq!(r.pointer_move(&at(0.0, 0.0), &[]), None);

        r.set_tooltip_visible(true);
        assert_eq!(r.pointer_move(&at(5.0, 5.0), &[EntityId(3)]), Some(InteractionEffect::HideInfo));
        r.set_tooltip_visible(false);
        assert_eq!(r.pointer_move(&at(6.0, 6.0), &[]), None);
        assert!(!r.tooltip_visible());
    }

    #[test]
    fn undelivered_hide_is_retried() {
        let mut r = resolver();
        r.set_tooltip_visible(true);
        // The hide never reached the host, so the state stays visible.
        assert_eq!(r.pointer_move(&at(0.0, 0.0), &[]), Some(InteractionEffect::HideInfo));
        assert_eq!(r.pointer_move(&at(1.0, 1.0), &[]), Some(InteractionEffect::HideInfo));
    }

    #[test]
    fn click_focuses_body() {
        let r = resolver();
        assert_eq!(
            r.pointer_click(&[EntityId(2), EntityId(11)]),
            Some(InteractionEffect::Focus { body: BodyId(1), entity: EntityId(11) })
        );
        assert_eq!(r.pointer_click(&[EntityId(2)]), None);
    }
}
