/// One outgoing copy of the scene, shaped for the renderer
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::entity::{
    Animation, FrameBox, FrameTransform, Light, Model, ModelMove, NodeTransform, Sentence,
    VoxelBox,
};
use crate::error::Result;
use crate::scene::SceneStore;
use crate::sprite::{Sprite, SpriteMove};
use crate::wire::WireNumber;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub node_transform: NodeTransform,
    pub frame_transforms: Vec<FrameTransform>,
    pub global_animation: Animation,
    pub animation: Animation,
    pub boxes: Vec<VoxelBox>,
    pub frames: Vec<FrameBox>,
    pub sentences: Vec<Sentence>,
    pub lights: Vec<Light>,
    pub commands: Vec<String>,
    pub models: Vec<Model>,
    pub model_moves: Vec<ModelMove>,
    pub sprites: Vec<Sprite>,
    pub sprite_moves: Vec<SpriteMove>,
    pub size: WireNumber,
    pub shape: String,
    pub interval: WireNumber,
    pub is_metallic: u8,
    pub roughness: WireNumber,
    pub is_allowed_float: u8,
    pub name: String,
    pub date: String,
}

impl Snapshot {
    /// Copy every collection and flag out of the scene.
    ///
    /// The rotation-style registry is session metadata and is not copied.
    pub fn capture(scene: &SceneStore, name: &str, date: DateTime<Utc>) -> Self {
        Self {
            node_transform: scene.node_transform,
            frame_transforms: scene.frame_transforms.clone(),
            global_animation: scene.global_animation,
            animation: scene.animation,
            boxes: scene.boxes.clone(),
            frames: scene.frames.clone(),
            sentences: scene.sentences.clone(),
            lights: scene.lights.clone(),
            commands: scene.commands.clone(),
            models: scene.models.clone(),
            model_moves: scene.model_moves.clone(),
            sprites: scene.sprites.clone(),
            sprite_moves: scene.sprite_moves.clone(),
            size: WireNumber(scene.size),
            shape: scene.shape.clone(),
            interval: WireNumber(scene.interval),
            is_metallic: u8::from(scene.metallic),
            roughness: WireNumber(scene.roughness),
            is_allowed_float: scene.precision.flag(),
            name: name.to_string(),
            date: date.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Color;
    use crate::scene::FLOAT_COMMAND;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_field_names_and_defaults() {
        let scene = SceneStore::new();
        let value: Value = serde_json::to_value(scene.snapshot_at("demo", fixed_date())).unwrap();

        assert_eq!(
            value,
            json!({
                "nodeTransform": [0, 0, 0, 0, 0, 0],
                "frameTransforms": [],
                "globalAnimation": [0, 0, 0, 0, 0, 0, 1, 0],
                "animation": [0, 0, 0, 0, 0, 0, 1, 0],
                "boxes": [],
                "frames": [],
                "sentences": [],
                "lights": [],
                "commands": [],
                "models": [],
                "modelMoves": [],
                "sprites": [],
                "spriteMoves": [],
                "size": 1,
                "shape": "box",
                "interval": 0.01,
                "isMetallic": 0,
                "roughness": 0.5,
                "isAllowedFloat": 0,
                "name": "demo",
                "date": "2024-05-01T12:30:00.000Z"
            })
        );
    }

    #[test]
    fn test_remove_then_snapshot() {
        let mut scene = SceneStore::new();
        scene.create_box(-1.0, 0.0, 0.0, Color::rgb(1.0, 0.0, 0.0));
        scene.create_box(0.0, 0.0, 0.0, Color::rgb(0.0, 1.0, 0.0));
        scene.remove_box(-1.0, 0.0, 0.0);

        let value = serde_json::to_value(scene.snapshot("scenario")).unwrap();
        assert_eq!(value["boxes"], json!([[0, 0, 0, 0, 1, 0, 1, -1]]));
    }

    #[test]
    fn test_snapshot_does_not_clear_scene() {
        let mut scene = SceneStore::new();
        scene.create_box(0.0, 0.0, 0.0, Color::WHITE);
        let first = scene.snapshot_at("a", fixed_date());
        scene.create_box(1.0, 0.0, 0.0, Color::WHITE);
        let second = scene.snapshot_at("a", fixed_date());

        assert_eq!(first.boxes.len(), 1);
        assert_eq!(second.boxes.len(), 2);
    }

    #[test]
    fn test_reset_matches_fresh_store() {
        let mut scene = SceneStore::new();
        scene.set_command(FLOAT_COMMAND);
        scene.create_box(0.5, 0.5, 0.5, Color::BLACK);
        scene.frame_in();
        scene.translate(1.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        scene.set_light(0.0, 0.0, 0.0, Color::WHITE, 100.0, 1.0, "spot");
        scene.write_sentence("x", 0.0, 0.0, 0.0, Color::WHITE, 8.0, false);
        scene.create_model("Moon", "m", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        scene.move_model("m", 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        scene.create_sprite("s", &["#fff"], 0.0, 0.0, 0.0, 1.0, true);
        scene.move_sprite("s", 1.0, 1.0, 0.0, 1.0, true);
        scene.change_shape("sphere");
        scene.animate(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 5.0);

        scene.reset();

        assert_eq!(
            scene.snapshot_at("same", fixed_date()),
            SceneStore::new().snapshot_at("same", fixed_date())
        );
    }

    #[test]
    fn test_float_flag_and_material() {
        let mut scene = SceneStore::new();
        scene.set_command(FLOAT_COMMAND);
        scene.change_material(true, 0.2);
        let snapshot = scene.snapshot("m");
        assert_eq!(snapshot.is_allowed_float, 1);
        assert_eq!(snapshot.is_metallic, 1);
        assert!(snapshot.to_json().unwrap().contains("\"roughness\":0.2"));
    }
}
