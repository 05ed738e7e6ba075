use serde::{Deserialize, Serialize};
use crate::api::types::EntityId;
use crate::components::mesh::{Color, Shading};

/// Everything the host needs to build its scene graph once at startup.
/// Serialized to JSON and handed to the page; per-frame transforms travel
/// separately through the render instance buffer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Clear color behind the scene.
    pub background: Color,
    #[serde(default)]
    pub lights: Vec<LightDescriptor>,
    #[serde(default)]
    pub nodes: Vec<NodeDescriptor>,
}

/// Geometry the host should create for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Sphere { radius: f32 },
    /// Flat annulus in the XZ plane.
    Ring { inner: f32, outer: f32, segments: u32 },
    /// Point cloud, `positions` packed as x, y, z triples.
    Points { positions: Vec<f32>, size: f32 },
}

/// Describes a single scene-graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Id the host tags the node with; pick results report it back.
    pub id: EntityId,
    /// Human-readable name (e.g., "Saturn", "Saturn/ring").
    pub tag: String,
    /// Parent node. Children follow their parent's transform.
    #[serde(default)]
    pub parent: Option<EntityId>,
    pub primitive: Primitive,
    pub color: Color,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub shading: Shading,
    #[serde(default)]
    pub shininess: f32,
    /// Whether the node takes part in pointer picking.
    #[serde(default)]
    pub pickable: bool,
    #[serde(default)]
    pub cast_shadow: bool,
    #[serde(default)]
    pub receive_shadow: bool,
    /// Tooltip title and text, for nodes that have them.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

impl NodeDescriptor {
    pub fn new(id: EntityId, tag: impl Into<String>, primitive: Primitive, color: Color) -> Self {
        Self {
            id,
            tag: tag.into(),
            parent: None,
            primitive,
            color,
            opacity: 1.0,
            shading: Shading::Basic,
            shininess: 0.0,
            pickable: false,
            cast_shadow: false,
            receive_shadow: false,
            title: None,
            info: None,
        }
    }

    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn lit(mut self, shininess: f32) -> Self {
        self.shading = Shading::Phong;
        self.shininess = shininess;
        self
    }

    pub fn with_shadows(mut self) -> Self {
        self.cast_shadow = true;
        self.receive_shadow = true;
        self
    }

    /// Make the node pickable and attach its tooltip text.
    pub fn with_info(mut self, title: impl Into<String>, info: impl Into<String>) -> Self {
        self.pickable = true;
        self.title = Some(title.into());
        self.info = Some(info.into());
        self
    }
}

/// Light sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightDescriptor {
    Ambient { color: Color, intensity: f32 },
    Point {
        color: Color,
        intensity: f32,
        /// Distance at which the light falls off to zero.
        range: f32,
        position: [f32; 3],
        /// Shadow map resolution, or 0 for no shadows.
        shadow_map_size: u32,
    },
}

fn default_opacity() -> f32 {
    1.0
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn push(&mut self, node: NodeDescriptor) {
        self.nodes.push(node);
    }

    pub fn node(&self, id: EntityId) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
