/// Scene entities and their snapshot encoding
///
/// Every entity travels as a flat JSON array; the `Serialize` impls below
/// fix the element order the renderer reads.
use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use crate::wire::{format_number, numbers, WireNumber};

/// Texture catalog; a box's texture id is its index here
pub const TEXTURE_NAMES: [&str; 5] = ["grass", "stone", "dirt", "planks", "bricks"];

/// Texture id used when the name is absent or unknown
pub const NO_TEXTURE: i32 = -1;

/// Assets the renderer knows how to place as models
pub const MODEL_NAMES: [&str; 19] = [
    "Earth",
    "Mercury",
    "Venus",
    "Mars",
    "Jupiter",
    "Saturn",
    "Uranus",
    "Neptune",
    "Pluto",
    "Sun",
    "Moon",
    "ToyBiplane",
    "ToyCar",
    "Drummer",
    "Robot",
    "ToyRocket",
    "RocketToy1",
    "RocketToy2",
    "Skull",
];

/// Resolve a texture name to its catalog index
pub fn texture_id(name: &str) -> i32 {
    TEXTURE_NAMES
        .iter()
        .position(|t| *t == name)
        .map_or(NO_TEXTURE, |i| i as i32)
}

pub fn is_known_model(name: &str) -> bool {
    MODEL_NAMES.contains(&name)
}

/// RGBA color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A cell on the live scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelBox {
    pub position: [f64; 3],
    pub color: Color,
    pub texture: i32,
}

impl VoxelBox {
    pub fn occupies(&self, position: [f64; 3]) -> bool {
        self.position == position
    }
}

impl Serialize for VoxelBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(8)?;
        for v in self.position.into_iter().chain(self.color.to_array()) {
            tuple.serialize_element(&WireNumber(v))?;
        }
        tuple.serialize_element(&self.texture)?;
        tuple.end()
    }
}

/// A cell recorded into a keyframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBox {
    pub voxel: VoxelBox,
    pub frame_id: u32,
}

impl FrameBox {
    pub fn occupies(&self, position: [f64; 3], frame_id: u32) -> bool {
        self.frame_id == frame_id && self.voxel.occupies(position)
    }
}

impl Serialize for FrameBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(9)?;
        let v = &self.voxel;
        for n in v.position.into_iter().chain(v.color.to_array()) {
            tuple.serialize_element(&WireNumber(n))?;
        }
        tuple.serialize_element(&v.texture)?;
        tuple.serialize_element(&self.frame_id)?;
        tuple.end()
    }
}

/// Node placement: `[x, y, z, pitch, yaw, roll]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeTransform {
    pub position: [f64; 3],
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl NodeTransform {
    fn values(&self) -> [f64; 6] {
        let [x, y, z] = self.position;
        [x, y, z, self.pitch, self.yaw, self.roll]
    }
}

impl Serialize for NodeTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        numbers(self.values()).serialize(serializer)
    }
}

/// Node placement recorded into a keyframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    pub transform: NodeTransform,
    pub frame_id: u32,
}

impl Serialize for FrameTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(7)?;
        for v in self.transform.values() {
            tuple.serialize_element(&WireNumber(v))?;
        }
        tuple.serialize_element(&self.frame_id)?;
        tuple.end()
    }
}

/// Looping motion: `[x, y, z, pitch, yaw, roll, scale, interval]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub position: [f64; 3],
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub scale: f64,
    pub interval: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            scale: 1.0,
            interval: 0.0,
        }
    }
}

impl Serialize for Animation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [x, y, z] = self.position;
        numbers([x, y, z, self.pitch, self.yaw, self.roll, self.scale, self.interval])
            .serialize(serializer)
    }
}

/// Kind of light source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightType {
    #[default]
    Point,
    Spot,
    Directional,
}

impl LightType {
    /// Parse a light type name; anything unrecognized is a point light
    pub fn from_name(name: &str) -> Self {
        match name {
            "spot" => LightType::Spot,
            "directional" => LightType::Directional,
            _ => LightType::Point,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            LightType::Point => 1,
            LightType::Spot => 2,
            LightType::Directional => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: [f64; 3],
    pub color: Color,
    pub intensity: f64,
    pub interval: f64,
    pub kind: LightType,
}

impl Serialize for Light {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(10)?;
        for v in self.position.into_iter().chain(self.color.to_array()) {
            tuple.serialize_element(&WireNumber(v))?;
        }
        tuple.serialize_element(&WireNumber(self.intensity))?;
        tuple.serialize_element(&WireNumber(self.interval))?;
        tuple.serialize_element(&self.kind.code())?;
        tuple.end()
    }
}

/// Text entry; numeric fields are already in their textual form
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    pub position: [String; 3],
    pub color: [String; 4],
    pub size: String,
    pub fixed_width: bool,
}

impl Sentence {
    pub fn new(text: &str, position: [f64; 3], color: Color, size: f64, fixed_width: bool) -> Self {
        Self {
            text: text.to_string(),
            position: position.map(format_number),
            color: color.to_array().map(format_number),
            size: format_number(size),
            fixed_width,
        }
    }
}

impl Serialize for Sentence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(10)?;
        tuple.serialize_element(&self.text)?;
        for field in self.position.iter().chain(&self.color) {
            tuple.serialize_element(field)?;
        }
        tuple.serialize_element(&self.size)?;
        tuple.serialize_element(if self.fixed_width { "1" } else { "0" })?;
        tuple.end()
    }
}

/// Position, orientation and scale of a model, in textual form
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub position: [String; 3],
    pub rotation: [String; 3],
    pub scale: String,
}

impl Placement {
    pub fn new(position: [f64; 3], pitch: f64, yaw: f64, roll: f64, scale: f64) -> Self {
        Self {
            position: position.map(format_number),
            rotation: [pitch, yaw, roll].map(format_number),
            scale: format_number(scale),
        }
    }

    fn fields(&self) -> impl Iterator<Item = &String> {
        self.position
            .iter()
            .chain(&self.rotation)
            .chain(std::iter::once(&self.scale))
    }
}

/// A catalog asset placed under an entity name
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub model: String,
    pub entity: String,
    pub placement: Placement,
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(9)?;
        tuple.serialize_element(&self.model)?;
        for field in self.placement.fields() {
            tuple.serialize_element(field)?;
        }
        tuple.serialize_element(&self.entity)?;
        tuple.end()
    }
}

/// A move of a previously placed model entity
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMove {
    pub entity: String,
    pub placement: Placement,
}

impl Serialize for ModelMove {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(8)?;
        tuple.serialize_element(&self.entity)?;
        for field in self.placement.fields() {
            tuple.serialize_element(field)?;
        }
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_texture_lookup() {
        assert_eq!(texture_id("grass"), 0);
        assert_eq!(texture_id("bricks"), 4);
        assert_eq!(texture_id(""), NO_TEXTURE);
        assert_eq!(texture_id("marble"), NO_TEXTURE);
    }

    #[test]
    fn test_light_type_defaults_to_point() {
        assert_eq!(LightType::from_name("spot").code(), 2);
        assert_eq!(LightType::from_name("directional").code(), 3);
        assert_eq!(LightType::from_name("laser"), LightType::Point);
    }

    #[test]
    fn test_box_encoding() {
        let voxel = VoxelBox {
            position: [1.0, -2.0, 0.5],
            color: Color::new(1.0, 0.25, 0.0, 1.0),
            texture: NO_TEXTURE,
        };
        assert_eq!(
            serde_json::to_value(voxel).unwrap(),
            json!([1, -2, 0.5, 1, 0.25, 0, 1, -1])
        );
        let frame = FrameBox { voxel, frame_id: 3 };
        assert_eq!(serde_json::to_value(frame).unwrap().as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_sentence_fields_are_text() {
        let sentence = Sentence::new("hi", [1.0, 2.0, 3.0], Color::rgb(0.5, 1.0, 0.0), 8.0, true);
        assert_eq!(
            serde_json::to_value(&sentence).unwrap(),
            json!(["hi", "1", "2", "3", "0.5", "1", "0", "1", "8", "1"])
        );
    }

    #[test]
    fn test_model_encoding_order() {
        let model = Model {
            model: "Earth".to_string(),
            entity: "planet".to_string(),
            placement: Placement::new([0.0, 5.0, 0.0], 0.0, 45.0, 0.0, 2.0),
        };
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!(["Earth", "0", "5", "0", "0", "45", "0", "2", "planet"])
        );
    }
}
