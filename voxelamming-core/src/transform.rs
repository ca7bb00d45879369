/// Nested local frames and the matrix stack
use nalgebra::{Matrix3, Vector3};

use crate::error::{Result, SceneError};
use crate::quantize::{quantize_position, Precision};
use crate::rotation::{apply_rotation, mat_mul, rotation_matrix, transpose};

/// Orientation of a frame.
///
/// Leaf transforms keep the angles they were given; composed transforms
/// keep the already multiplied rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    Angles { pitch: f64, yaw: f64, roll: f64 },
    Matrix(Matrix3<f64>),
}

impl Rotation {
    pub fn identity() -> Self {
        Rotation::Angles {
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    /// Expand to a rotation matrix
    pub fn to_matrix(&self) -> Matrix3<f64> {
        match *self {
            Rotation::Angles { pitch, yaw, roll } => rotation_matrix(pitch, yaw, roll),
            Rotation::Matrix(m) => m,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// A frame: origin plus orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f64>,
    pub rotation: Rotation,
}

impl Transform {
    pub fn new(x: f64, y: f64, z: f64, rotation: Rotation) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            rotation,
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, Rotation::identity())
    }

    /// Map a local offset into this frame's parent space.
    ///
    /// The stored rotation maps local to global, so the offset is carried
    /// through its transpose before being added to the origin.
    pub fn place(&self, offset: Vector3<f64>) -> Vector3<f64> {
        let inverse = transpose(&self.rotation.to_matrix());
        self.position + apply_rotation(&offset, &inverse)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Stack of saved frames.
///
/// The depth doubles as the "nested" switch: while it is above zero,
/// positions resolve through the saved frames instead of being global.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn is_nested(&self) -> bool {
        !self.saved.is_empty()
    }

    /// Frame that box placements currently resolve through
    pub fn current(&self) -> &Transform {
        &self.current
    }

    /// Save the current frame
    pub fn push(&mut self) {
        self.saved.push(self.current);
        log::debug!("push_matrix: depth {}", self.saved.len());
    }

    /// Restore the most recently saved frame.
    ///
    /// Popping an empty stack is rejected and leaves the stack untouched.
    pub fn pop(&mut self) -> Result<()> {
        let restored = self.saved.pop().ok_or(SceneError::EmptyTransformStack)?;
        self.current = restored;
        log::debug!("pop_matrix: depth {}", self.saved.len());
        Ok(())
    }

    /// Resolve a local transform.
    ///
    /// At depth zero the quantized input is returned as a flat transform and
    /// nothing is stored. When nested, the top saved frame is the parent: the
    /// offset is placed in parent space and the rotation becomes
    /// `R(-pitch, -yaw, -roll) * R_parent`. The result becomes the current
    /// frame for subsequent box placements.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        pitch: f64,
        yaw: f64,
        roll: f64,
        precision: Precision,
    ) -> Transform {
        let Some(parent) = self.saved.last() else {
            let [x, y, z] = quantize_position([x, y, z], precision);
            return Transform::new(x, y, z, Rotation::Angles { pitch, yaw, roll });
        };

        let placed = parent.place(Vector3::new(x, y, z));
        let [x, y, z] = quantize_position([placed.x, placed.y, placed.z], precision);
        let local = rotation_matrix(-pitch, -yaw, -roll);
        let rotation = mat_mul(&local, &parent.rotation.to_matrix());

        self.current = Transform::new(x, y, z, Rotation::Matrix(rotation));
        self.current
    }

    /// Map box coordinates through the current frame when nested.
    ///
    /// The result is not quantized; the caller snaps it with the scene's
    /// precision.
    pub fn resolve_box_position(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        if !self.is_nested() {
            return [x, y, z];
        }
        let p = self.current.place(Vector3::new(x, y, z));
        [p.x, p.y, p.z]
    }
}
