// Math utilities for node transforms

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Compose a homogeneous transform from translation, rotation and scale.
///
/// The result is `T * R * S`: scale is applied first, then rotation, then
/// translation. Inputs are not checked, so a NaN component ends up in the
/// matrix.
pub fn compose_transform(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    let matrix = Mat4::from_scale_rotation_translation(scale, rotation, translation);
    log::trace!("composed TRS matrix {:?}", matrix);
    matrix
}

/// Convert an angle in degrees to radians.
pub fn deg_to_rad(angle: f64) -> f64 {
    angle * std::f64::consts::PI / 180.0
}

/// Translation, rotation and scale of a single node.
///
/// Field names and defaults follow glTF nodes, so a node object can be
/// deserialized directly and any missing field falls back to identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub translation: Vec3,
    /// Unit quaternion, `[x, y, z, w]` when serialized.
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Create a new transform
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform whose rotation is given as XYZ Euler angles in degrees.
    pub fn from_euler_degrees(translation: Vec3, degrees: [f64; 3], scale: Vec3) -> Self {
        let [x, y, z] = degrees.map(|angle| deg_to_rad(angle) as f32);
        Self::new(translation, Quat::from_euler(EulerRot::XYZ, x, y, z), scale)
    }

    /// Generate transformation matrix
    pub fn matrix(&self) -> Mat4 {
        compose_transform(self.translation, self.rotation, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
