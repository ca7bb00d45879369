/// 2D sprites, their moves and the rotation-style registry
use std::collections::HashMap;

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use crate::wire::format_number;

/// How a sprite's heading turns into the facing the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationStyle {
    /// Heading is passed through unchanged
    #[default]
    AllAround,
    /// Faces right, or flips to face left
    LeftRight,
    /// Always faces the same way
    DontRotate,
}

impl RotationStyle {
    /// Parse a style name; unknown names rotate all around
    pub fn from_name(name: &str) -> Self {
        match name {
            "left-right" => RotationStyle::LeftRight,
            "don't rotate" => RotationStyle::DontRotate,
            _ => RotationStyle::AllAround,
        }
    }

    /// Direction value emitted for a heading in degrees
    pub fn resolve(self, direction: f64) -> String {
        match self {
            RotationStyle::DontRotate => "0".to_string(),
            RotationStyle::LeftRight => {
                let m = direction.rem_euclid(360.0);
                if m > 90.0 && m < 270.0 {
                    "-180".to_string()
                } else {
                    "0".to_string()
                }
            }
            RotationStyle::AllAround => format_number(direction),
        }
    }
}

/// Per-sprite styles for the current session.
///
/// Never serialized; consulted only when a move is recorded, so changing a
/// style affects later moves and leaves recorded ones as they were.
#[derive(Debug, Clone, Default)]
pub struct RotationStyles {
    styles: HashMap<String, RotationStyle>,
}

impl RotationStyles {
    pub fn set(&mut self, sprite: &str, style: RotationStyle) {
        self.styles.insert(sprite.to_string(), style);
    }

    pub fn get(&self, sprite: &str) -> RotationStyle {
        self.styles.get(sprite).copied().unwrap_or_default()
    }

    pub fn resolve(&self, sprite: &str, direction: f64) -> String {
        self.get(sprite).resolve(direction)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Screen placement shared by sprites and their moves, in textual form
#[derive(Debug, Clone, PartialEq)]
pub struct SpritePose {
    pub x: String,
    pub y: String,
    pub direction: String,
    pub scale: String,
    pub visible: bool,
}

impl SpritePose {
    fn visible_flag(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }
}

/// A dot-art sprite: one color string per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub colors: Vec<String>,
    pub pose: SpritePose,
}

impl Serialize for Sprite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(7)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.colors)?;
        tuple.serialize_element(&self.pose.x)?;
        tuple.serialize_element(&self.pose.y)?;
        tuple.serialize_element(&self.pose.direction)?;
        tuple.serialize_element(&self.pose.scale)?;
        tuple.serialize_element(self.pose.visible_flag())?;
        tuple.end()
    }
}

/// Latest pose requested for a named sprite
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMove {
    pub name: String,
    pub pose: SpritePose,
}

impl Serialize for SpriteMove {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(6)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.pose.x)?;
        tuple.serialize_element(&self.pose.y)?;
        tuple.serialize_element(&self.pose.direction)?;
        tuple.serialize_element(&self.pose.scale)?;
        tuple.serialize_element(self.pose.visible_flag())?;
        tuple.end()
    }
}
