/// The mutable scene: boxes, keyframes, lights, text, models and sprites
use chrono::{DateTime, Utc};

use crate::entity::{
    is_known_model, texture_id, Animation, Color, FrameBox, FrameTransform, Light, LightType,
    Model, ModelMove, NodeTransform, Placement, Sentence, VoxelBox,
};
use crate::error::Result;
use crate::line::{rasterize, LineOutcome};
use crate::quantize::{quantize_color, quantize_position, Precision};
use crate::snapshot::Snapshot;
use crate::sprite::{RotationStyle, RotationStyles, Sprite, SpriteMove, SpritePose};
use crate::transform::TransformStack;
use crate::wire::format_number;

/// Command that switches the scene to float precision
pub const FLOAT_COMMAND: &str = "float";

/// Where placed boxes go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recording {
    /// Boxes go to the live scene
    #[default]
    Live,
    /// Boxes go to the keyframe currently being recorded
    Keyframe,
}

/// Accumulated scene state for one send.
///
/// All operations run on one thread; the store is cleared only by
/// [`SceneStore::reset`].
#[derive(Debug, Clone)]
pub struct SceneStore {
    pub(crate) precision: Precision,
    pub(crate) recording: Recording,
    pub(crate) frame_id: u32,
    pub(crate) transforms: TransformStack,
    pub(crate) node_transform: NodeTransform,
    pub(crate) frame_transforms: Vec<FrameTransform>,
    pub(crate) global_animation: Animation,
    pub(crate) animation: Animation,
    pub(crate) boxes: Vec<VoxelBox>,
    pub(crate) frames: Vec<FrameBox>,
    pub(crate) sentences: Vec<Sentence>,
    pub(crate) lights: Vec<Light>,
    pub(crate) commands: Vec<String>,
    pub(crate) models: Vec<Model>,
    pub(crate) model_moves: Vec<ModelMove>,
    pub(crate) sprites: Vec<Sprite>,
    pub(crate) sprite_moves: Vec<SpriteMove>,
    pub(crate) rotation_styles: RotationStyles,
    pub(crate) size: f64,
    pub(crate) shape: String,
    pub(crate) interval: f64,
    pub(crate) metallic: bool,
    pub(crate) roughness: f64,
}

impl SceneStore {
    pub fn new() -> Self {
        Self {
            precision: Precision::Grid,
            recording: Recording::Live,
            frame_id: 0,
            transforms: TransformStack::new(),
            node_transform: NodeTransform::default(),
            frame_transforms: Vec::new(),
            global_animation: Animation::default(),
            animation: Animation::default(),
            boxes: Vec::new(),
            frames: Vec::new(),
            sentences: Vec::new(),
            lights: Vec::new(),
            commands: Vec::new(),
            models: Vec::new(),
            model_moves: Vec::new(),
            sprites: Vec::new(),
            sprite_moves: Vec::new(),
            rotation_styles: RotationStyles::default(),
            size: 1.0,
            shape: "box".to_string(),
            interval: 0.01,
            metallic: false,
            roughness: 0.5,
        }
    }

    /// Drop everything and return to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn recording(&self) -> Recording {
        self.recording
    }

    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    pub fn transforms(&self) -> &TransformStack {
        &self.transforms
    }

    pub fn boxes(&self) -> &[VoxelBox] {
        &self.boxes
    }

    pub fn frames(&self) -> &[FrameBox] {
        &self.frames
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn model_moves(&self) -> &[ModelMove] {
        &self.model_moves
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn sprite_moves(&self) -> &[SpriteMove] {
        &self.sprite_moves
    }

    pub fn rotation_styles(&self) -> &RotationStyles {
        &self.rotation_styles
    }

    fn quantize(&self, coords: [f64; 3]) -> [f64; 3] {
        quantize_position(coords, self.precision)
    }

    // ---- precision, commands and keyframes ----

    /// Switch to float precision. There is no way back short of `reset`.
    pub fn enable_float(&mut self) {
        self.precision = Precision::Float;
    }

    /// Append a renderer command; `"float"` also switches precision
    pub fn set_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
        if command == FLOAT_COMMAND {
            self.enable_float();
        }
    }

    pub fn set_frame_fps(&mut self, fps: u32) {
        self.commands.push(format!("fps {fps}"));
    }

    pub fn set_frame_repeats(&mut self, repeats: u32) {
        self.commands.push(format!("repeats {repeats}"));
    }

    /// Start recording boxes into the current keyframe
    pub fn frame_in(&mut self) {
        self.recording = Recording::Keyframe;
    }

    /// Stop recording; the next recording gets a fresh frame id
    pub fn frame_out(&mut self) {
        self.recording = Recording::Live;
        self.frame_id += 1;
    }

    // ---- matrix stack ----

    pub fn push_matrix(&mut self) {
        self.transforms.push();
    }

    pub fn pop_matrix(&mut self) -> Result<()> {
        self.transforms.pop()
    }

    /// Set the node transform, or the current nested frame when the
    /// matrix stack is in use.
    pub fn translate(&mut self, x: f64, y: f64, z: f64, pitch: f64, yaw: f64, roll: f64) {
        let nested = self.transforms.is_nested();
        let resolved = self
            .transforms
            .resolve(x, y, z, pitch, yaw, roll, self.precision);
        if nested {
            return;
        }

        let transform = NodeTransform {
            position: [resolved.position.x, resolved.position.y, resolved.position.z],
            pitch,
            yaw,
            roll,
        };
        match self.recording {
            Recording::Live => self.node_transform = transform,
            Recording::Keyframe => self.frame_transforms.push(FrameTransform {
                transform,
                frame_id: self.frame_id,
            }),
        }
    }

    // ---- boxes ----

    /// Place a box, evicting whatever occupied the cell.
    ///
    /// Coordinates go through the current nested frame first, then are
    /// quantized. Unknown texture names are stored as `-1`.
    pub fn place_box(&mut self, x: f64, y: f64, z: f64, color: Color, texture: &str) {
        let [x, y, z] = self.transforms.resolve_box_position(x, y, z);
        let position = self.quantize([x, y, z]);
        let color = Color::from_array(quantize_color(color.to_array()));

        self.evict(position);

        let voxel = VoxelBox {
            position,
            color,
            texture: texture_id(texture),
        };
        match self.recording {
            Recording::Live => self.boxes.push(voxel),
            Recording::Keyframe => self.frames.push(FrameBox {
                voxel,
                frame_id: self.frame_id,
            }),
        }
    }

    /// Place an untextured box
    pub fn create_box(&mut self, x: f64, y: f64, z: f64, color: Color) {
        self.place_box(x, y, z, color, "");
    }

    /// Remove the box at a cell, if any. Keyframe-scoped while recording.
    pub fn remove_box(&mut self, x: f64, y: f64, z: f64) {
        let position = self.quantize([x, y, z]);
        self.evict(position);
    }

    fn evict(&mut self, position: [f64; 3]) {
        match self.recording {
            Recording::Live => {
                if let Some(i) = self.boxes.iter().position(|b| b.occupies(position)) {
                    self.boxes.remove(i);
                }
            }
            Recording::Keyframe => {
                let frame_id = self.frame_id;
                if let Some(i) = self
                    .frames
                    .iter()
                    .position(|f| f.occupies(position, frame_id))
                {
                    self.frames.remove(i);
                }
            }
        }
    }

    /// Draw a chain of boxes from one point to another.
    pub fn draw_line(&mut self, from: [f64; 3], to: [f64; 3], color: Color) -> LineOutcome {
        let (from, to) = (self.quantize(from), self.quantize(to));
        let Some(cells) = rasterize(from, to) else {
            log::debug!("draw_line: degenerate segment {from:?} -> {to:?}");
            return LineOutcome::Degenerate;
        };

        let mut placed = 0;
        for [x, y, z] in cells {
            self.create_box(x, y, z, color);
            placed += 1;
        }
        LineOutcome::Drawn(placed)
    }

    // ---- appearance ----

    pub fn set_box_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn set_build_interval(&mut self, interval: f64) {
        self.interval = interval;
    }

    pub fn change_shape(&mut self, shape: &str) {
        self.shape = shape.to_string();
    }

    pub fn change_material(&mut self, metallic: bool, roughness: f64) {
        self.metallic = metallic;
        self.roughness = roughness;
    }

    // ---- animation ----

    #[allow(clippy::too_many_arguments)]
    pub fn animate_global(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        scale: f64,
        interval: f64,
    ) {
        self.global_animation = Animation {
            position: self.quantize([x, y, z]),
            pitch,
            yaw,
            roll,
            scale,
            interval,
        };
    }

    #[allow(clippy::too_many_arguments)]
    pub fn animate(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        scale: f64,
        interval: f64,
    ) {
        self.animation = Animation {
            position: self.quantize([x, y, z]),
            pitch,
            yaw,
            roll,
            scale,
            interval,
        };
    }

    // ---- text and lights ----

    #[allow(clippy::too_many_arguments)]
    pub fn write_sentence(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        z: f64,
        color: Color,
        size: f64,
        fixed_width: bool,
    ) {
        let position = self.quantize([x, y, z]);
        let color = Color::from_array(quantize_color(color.to_array()));
        self.sentences
            .push(Sentence::new(text, position, color, size, fixed_width));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_light(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        color: Color,
        intensity: f64,
        interval: f64,
        light_type: &str,
    ) {
        self.lights.push(Light {
            position: self.quantize([x, y, z]),
            color: Color::from_array(quantize_color(color.to_array())),
            intensity,
            interval,
            kind: LightType::from_name(light_type),
        });
    }

    // ---- models ----

    /// Place a catalog model under an entity name.
    ///
    /// Returns `false`, leaving the scene untouched, when the model name is
    /// not in the catalog.
    #[allow(clippy::too_many_arguments)]
    pub fn create_model(
        &mut self,
        model: &str,
        entity: &str,
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        scale: f64,
    ) -> bool {
        if !is_known_model(model) {
            log::warn!("create_model: no model named {model:?}, skipping");
            return false;
        }
        let placement = Placement::new(self.quantize([x, y, z]), pitch, yaw, roll, scale);
        self.models.push(Model {
            model: model.to_string(),
            entity: entity.to_string(),
            placement,
        });
        true
    }

    #[allow(clippy::too_many_arguments)]
    pub fn move_model(
        &mut self,
        entity: &str,
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        scale: f64,
    ) {
        let placement = Placement::new(self.quantize([x, y, z]), pitch, yaw, roll, scale);
        self.model_moves.push(ModelMove {
            entity: entity.to_string(),
            placement,
        });
    }

    // ---- sprites ----

    #[allow(clippy::too_many_arguments)]
    pub fn create_sprite(
        &mut self,
        name: &str,
        colors: &[&str],
        x: f64,
        y: f64,
        direction: f64,
        scale: f64,
        visible: bool,
    ) {
        self.sprites.push(Sprite {
            name: name.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            pose: SpritePose {
                x: format_number(x),
                y: format_number(y),
                direction: format_number(direction),
                scale: format_number(scale),
                visible,
            },
        });
    }

    /// Set how later moves of `name` turn its heading into a facing
    pub fn set_sprite_rotation_style(&mut self, name: &str, style: &str) {
        self.rotation_styles.set(name, RotationStyle::from_name(style));
    }

    /// Record the latest pose of a sprite, replacing any earlier move for it
    pub fn move_sprite(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        direction: f64,
        scale: f64,
        visible: bool,
    ) {
        let direction = self.rotation_styles.resolve(name, direction);
        self.sprite_moves.retain(|m| m.name != name);
        self.sprite_moves.push(SpriteMove {
            name: name.to_string(),
            pose: SpritePose {
                x: format_number(x),
                y: format_number(y),
                direction,
                scale: format_number(scale),
                visible,
            },
        });
    }

    // ---- snapshot ----

    /// Capture the scene now. The store is left as it is.
    pub fn snapshot(&self, name: &str) -> Snapshot {
        Snapshot::capture(self, name, Utc::now())
    }

    pub fn snapshot_at(&self, name: &str, date: DateTime<Utc>) -> Snapshot {
        Snapshot::capture(self, name, date)
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
