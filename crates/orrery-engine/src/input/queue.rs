use glam::Vec2;
use crate::api::types::EntityId;

/// Where the pointer is, in the two coordinate systems games care about.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPos {
    /// Normalized device coordinates, x and y in [-1, 1], y up.
    pub ndc: Vec2,
    /// Client pixel coordinates, y down (used to place DOM overlays).
    pub client: Vec2,
}

impl PointerPos {
    pub fn new(ndc: Vec2, client: Vec2) -> Self {
        Self { ndc, client }
    }

    /// Build from the raw floats the host passes across the WASM boundary.
    pub fn from_coords(ndc_x: f32, ndc_y: f32, client_x: f32, client_y: f32) -> Self {
        Self {
            ndc: Vec2::new(ndc_x, ndc_y),
            client: Vec2::new(client_x, client_y),
        }
    }
}

/// Input event types the engine understands.
/// Generic, no game-specific semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The pointer moved. `hits` is the host's ray-intersection result,
    /// ordered nearest first.
    PointerMove { pos: PointerPos, hits: Vec<EntityId> },
    /// The pointer clicked. Same pick convention as `PointerMove`.
    PointerClick { pos: PointerPos, hits: Vec<EntityId> },
    /// A custom event from the UI layer (sliders, buttons, resize).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove {
            pos: PointerPos::default(),
            hits: vec![EntityId(3), EntityId(1)],
        });
        q.push(InputEvent::Custom { kind: 2, a: 0.0, b: 0.0, c: 0.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn pick_order_is_preserved() {
        let mut q = InputQueue::new();
        let hits = vec![EntityId(9), EntityId(4), EntityId(7)];
        q.push(InputEvent::PointerClick { pos: PointerPos::default(), hits: hits.clone() });
        let first = q.iter().next();
        match first {
            Some(InputEvent::PointerClick { hits: got, .. }) => assert_eq!(got, &hits),
            other => panic!("Expected PointerClick, got {other:?}"),
        }
    }
}
