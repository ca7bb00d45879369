/// 3x3 rotation matrices built from Euler angles in degrees
use nalgebra::{Matrix3, Vector3};

/// Build the rotation for (pitch, yaw, roll) given in degrees.
///
/// The elementary rotations are composed as `Rx * (Rz * Ry)`: pitch about X,
/// roll about Z, yaw about Y. NaN or infinite angles propagate into the result.
pub fn rotation_matrix(pitch: f64, yaw: f64, roll: f64) -> Matrix3<f64> {
    let (pitch, yaw, roll) = (pitch.to_radians(), yaw.to_radians(), roll.to_radians());

    let rx = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, pitch.cos(), -pitch.sin(),
        0.0, pitch.sin(), pitch.cos(),
    );
    let ry = Matrix3::new(
        yaw.cos(), 0.0, yaw.sin(),
        0.0, 1.0, 0.0,
        -yaw.sin(), 0.0, yaw.cos(),
    );
    let rz = Matrix3::new(
        roll.cos(), -roll.sin(), 0.0,
        roll.sin(), roll.cos(), 0.0,
        0.0, 0.0, 1.0,
    );

    mat_mul(&rx, &mat_mul(&rz, &ry))
}

/// Plain matrix product `a * b`
pub fn mat_mul(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a * b
}

/// Rotate a point by `r`
pub fn apply_rotation(point: &Vector3<f64>, r: &Matrix3<f64>) -> Vector3<f64> {
    r * point
}

/// Inverse of a pure rotation
pub fn transpose(r: &Matrix3<f64>) -> Matrix3<f64> {
    r.transpose()
}
