/// A 3D turtle that draws lines of boxes as it walks
use nalgebra::Vector3;

use crate::entity::Color;
use crate::line::LineOutcome;
use crate::quantize::round_half_up;
use crate::scene::SceneStore;

const INITIAL_THETA: f64 = 90.0;
const INITIAL_PHI: f64 = 0.0;

/// Walker with a heading in spherical angles (degrees).
///
/// `theta` is measured from +Y and `phi` around Y starting at +Z, so the
/// initial heading points along +Z. Angles are never wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub position: Vector3<f64>,
    pub polar_theta: f64,
    pub polar_phi: f64,
    pub pen_is_down: bool,
    pub color: Color,
}

impl Turtle {
    pub fn new() -> Self {
        Self {
            position: Vector3::zeros(),
            polar_theta: INITIAL_THETA,
            polar_phi: INITIAL_PHI,
            pen_is_down: true,
            color: Color::BLACK,
        }
    }

    /// Unit vector along the current heading
    pub fn heading(&self) -> Vector3<f64> {
        let (theta, phi) = (self.polar_theta.to_radians(), self.polar_phi.to_radians());
        Vector3::new(theta.sin() * phi.sin(), theta.cos(), theta.sin() * phi.cos())
    }

    /// Move `length` along the heading, drawing when the pen is down.
    ///
    /// Returns the outcome of the line drawn, or `None` with the pen up.
    pub fn forward(&mut self, scene: &mut SceneStore, length: f64) -> Option<LineOutcome> {
        let target = (self.position + self.heading() * length).map(round_to_thousandths);

        let outcome = self.pen_is_down.then(|| {
            scene.draw_line(
                [self.position.x, self.position.y, self.position.z],
                [target.x, target.y, target.z],
                self.color,
            )
        });

        self.position = target;
        outcome
    }

    pub fn backward(&mut self, scene: &mut SceneStore, length: f64) -> Option<LineOutcome> {
        self.forward(scene, -length)
    }

    pub fn up(&mut self, degrees: f64) {
        self.polar_theta -= degrees;
    }

    pub fn down(&mut self, degrees: f64) {
        self.polar_theta += degrees;
    }

    pub fn left(&mut self, degrees: f64) {
        self.polar_phi += degrees;
    }

    pub fn right(&mut self, degrees: f64) {
        self.polar_phi -= degrees;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn pen_down(&mut self) {
        self.pen_is_down = true;
    }

    pub fn pen_up(&mut self) {
        self.pen_is_down = false;
    }

    pub fn set_pos(&mut self, x: f64, y: f64, z: f64) {
        self.position = Vector3::new(x, y, z);
    }

    /// Back to the origin, heading +Z, pen down, opaque black
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to_thousandths(v: f64) -> f64 {
    round_half_up(v * 1000.0) / 1000.0 + 0.0
}
