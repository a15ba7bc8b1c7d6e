use nalgebra::{Isometry3, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};
use std::fmt;

/// A rigid transform (rotation followed by translation) of a daughter frame
/// relative to its mother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    isometry: Isometry3<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    pub fn new(rotation: Rotation3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            isometry: Isometry3::from_parts(
                Translation3::from(translation),
                UnitQuaternion::from_rotation_matrix(&rotation),
            ),
        }
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(Rotation3::identity(), Vector3::new(x, y, z))
    }

    /// Builds a transform from XYZ Euler angles given in degrees.
    pub fn from_euler_degrees(angles: Vector3<f64>, translation: Vector3<f64>) -> Self {
        let rotation = Rotation3::from_euler_angles(
            angles.x.to_radians(),
            angles.y.to_radians(),
            angles.z.to_radians(),
        );
        Self::new(rotation, translation)
    }

    pub fn translation_vector(&self) -> Vector3<f64> {
        self.isometry.translation.vector
    }

    pub fn rotation(&self) -> Rotation3<f64> {
        self.isometry.rotation.to_rotation_matrix()
    }

    /// True when both the translation and the rotation hold only finite numbers.
    pub fn is_finite(&self) -> bool {
        self.isometry.translation.vector.iter().all(|v| v.is_finite())
            && self.isometry.rotation.coords.iter().all(|v| v.is_finite())
    }

    pub fn is_rotated(&self) -> bool {
        self.isometry.rotation.angle() > 1e-12
    }

    /// Maps a point from the daughter frame into the mother frame.
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        self.isometry.transform_point(point)
    }
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.translation_vector();
        write!(f, "({}, {}, {})", t.x, t.y, t.z)?;
        if self.is_rotated() {
            let (roll, pitch, yaw) = self.rotation().euler_angles();
            write!(
                f,
                " rot({:.3}, {:.3}, {:.3})",
                roll.to_degrees(),
                pitch.to_degrees(),
                yaw.to_degrees()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Point3::new(1.0, -2.0, 3.0);
        assert_eq!(Transform3D::identity().apply(&p), p);
        assert!(!Transform3D::default().is_rotated());
    }

    #[test]
    fn translation_moves_points() {
        let t = Transform3D::translation(900.0, 0.0, 0.0);
        assert_eq!(t.apply(&Point3::origin()), Point3::new(900.0, 0.0, 0.0));
        assert_eq!(t.translation_vector(), Vector3::new(900.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        let t = Transform3D::from_euler_degrees(
            Vector3::new(0.0, 0.0, 90.0),
            Vector3::new(10.0, 0.0, 0.0),
        );
        let p = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(10.0, 1.0, 0.0)).norm() < 1e-12);
        assert!(t.is_rotated());
    }

    #[test]
    fn nan_translation_or_angle_is_not_finite() {
        assert!(Transform3D::translation(900.0, 0.0, 0.0).is_finite());
        assert!(!Transform3D::translation(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Transform3D::translation(0.0, f64::INFINITY, 0.0).is_finite());
        let spun =
            Transform3D::from_euler_degrees(Vector3::new(f64::NAN, 0.0, 0.0), Vector3::zeros());
        assert!(!spun.is_finite());
    }

    #[test]
    fn display_prints_translation_and_rotation_only_when_rotated() {
        assert_eq!(Transform3D::translation(900.0, 0.0, 0.0).to_string(), "(900, 0, 0)");
        let rotated =
            Transform3D::from_euler_degrees(Vector3::new(0.0, 0.0, 90.0), Vector3::zeros());
        let text = rotated.to_string();
        assert!(text.starts_with("(0, 0, 0) rot("));
        assert!(text.ends_with("90.000)"));
    }
}
