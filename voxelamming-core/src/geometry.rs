/// Quad faces from voxel meshes and the boxes they stand for
use nalgebra::Point3;

use crate::entity::Color;
use crate::quantize::round_half_up;
use crate::scene::SceneStore;

/// A mesh vertex with an 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    pub position: Point3<f64>,
    pub color: [f64; 3],
}

impl ColoredVertex {
    pub fn new(x: f64, y: f64, z: f64, r: f64, g: f64, b: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            color: [r, g, b],
        }
    }
}

/// Axis-aligned plane a quad lies in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacePlane {
    YZ,
    ZX,
    XY,
}

/// One face of a voxel, given as four vertices.
///
/// Only the first three vertices decide placement; the fourth closes the
/// face and carries no extra information.
#[derive(Debug, Clone)]
pub struct Quad {
    pub vertices: [ColoredVertex; 4],
}

impl Quad {
    pub fn new(v0: ColoredVertex, v1: ColoredVertex, v2: ColoredVertex, v3: ColoredVertex) -> Self {
        Self {
            vertices: [v0, v1, v2, v3],
        }
    }

    /// Plane shared by the first three vertices
    pub fn plane(&self) -> FacePlane {
        let [a, b, c, _] = self.vertices.map(|v| v.position);
        if a.x == b.x && b.x == c.x {
            FacePlane::YZ
        } else if a.y == b.y && b.y == c.y {
            FacePlane::ZX
        } else {
            FacePlane::XY
        }
    }

    /// Grid box this face belongs to.
    ///
    /// The face's edge length is the voxel step. A face whose normal points
    /// toward negative space is shifted back by one step along its normal
    /// axis. Returns `None` for a face with zero extent.
    pub fn to_box(&self) -> Option<BoxDescriptor> {
        let [a, b, c, _] = self.vertices.map(|v| v.position);
        let min = |f: fn(&Point3<f64>) -> f64| f(&a).min(f(&b)).min(f(&c));
        let max = |f: fn(&Point3<f64>) -> f64| f(&a).max(f(&b)).max(f(&c));

        let mut x = min(|p| p.x);
        let mut y = min(|p| p.y);
        let mut z = min(|p| p.z);

        let step = match self.plane() {
            FacePlane::YZ => {
                let step = max(|p| p.y) - y;
                if a.y != b.y {
                    x -= step;
                }
                step
            }
            FacePlane::ZX => {
                let step = max(|p| p.z) - z;
                if a.z != b.z {
                    y -= step;
                }
                step
            }
            FacePlane::XY => {
                let step = max(|p| p.x) - x;
                if a.x != b.x {
                    z -= step;
                }
                step
            }
        };

        if step == 0.0 || !step.is_finite() {
            return None;
        }

        let snap = |v: f64| (round_half_up(v * 10.0 / step) / 10.0).floor();
        let [r, g, b] = self.vertices[0].color.map(|c| c / 255.0);

        // mesh space is z-up; scene space is y-up
        Some(BoxDescriptor {
            position: [snap(x), snap(z), -snap(y) + 0.0],
            color: Color::rgb(r, g, b),
        })
    }
}

/// A box ready to be placed in a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDescriptor {
    pub position: [f64; 3],
    pub color: Color,
}

impl BoxDescriptor {
    pub fn place(&self, scene: &mut SceneStore) {
        let [x, y, z] = self.position;
        scene.create_box(x, y, z, self.color);
    }
}
