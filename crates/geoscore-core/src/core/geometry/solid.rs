use super::transform::Transform3D;
use nalgebra::{Point3, Vector3};

/// An axis-aligned box centred on its local origin, defined by three half-extents.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSolid {
    pub half_extents: Vector3<f64>,
}

impl BoxSolid {
    pub fn new(half_extents: Vector3<f64>) -> Self {
        Self { half_extents }
    }

    pub fn cube(half_extent: f64) -> Self {
        Self::new(Vector3::repeat(half_extent))
    }

    /// Returns `true` if every half-extent is positive and finite.
    pub fn is_valid(&self) -> bool {
        self.half_extents
            .iter()
            .all(|&h| h.is_finite() && h > 0.0)
    }

    /// Enclosed volume in internal units (mm³).
    pub fn cubic_volume(&self) -> f64 {
        8.0 * self.half_extents.x * self.half_extents.y * self.half_extents.z
    }

    /// Full edge lengths along x, y and z.
    pub fn full_extents(&self) -> Vector3<f64> {
        self.half_extents * 2.0
    }

    pub fn corners(&self) -> [Point3<f64>; 8] {
        let h = &self.half_extents;
        let mut corners = [Point3::origin(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
            let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
            let sz = if i & 4 == 0 { -1.0 } else { 1.0 };
            *corner = Point3::new(sx * h.x, sy * h.y, sz * h.z);
        }
        corners
    }

    /// Axis-aligned bounding box of this solid after applying `transform`.
    pub fn bounding_box(&self, transform: &Transform3D) -> Aabb {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in self.corners() {
            let p = transform.apply(&corner);
            min = min.inf(&p);
            max = max.sup(&p);
        }
        Aabb { min, max }
    }
}

/// An axis-aligned bounding box expressed in some parent frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Returns `true` if the boxes share interior volume deeper than `tolerance`.
    ///
    /// Boxes that only touch along a face, edge or corner do not intersect.
    pub fn intersects(&self, other: &Aabb, tolerance: f64) -> bool {
        (0..3).all(|axis| {
            self.min[axis] < other.max[axis] - tolerance
                && other.min[axis] < self.max[axis] - tolerance
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Rotation3;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn cubic_volume_uses_full_extents() {
        let solid = BoxSolid::new(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(solid.cubic_volume(), 48.0);
        assert_eq!(solid.full_extents(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn is_valid_rejects_zero_negative_and_nan_extents() {
        assert!(BoxSolid::cube(1.0).is_valid());
        assert!(!BoxSolid::new(Vector3::new(1.0, 0.0, 1.0)).is_valid());
        assert!(!BoxSolid::new(Vector3::new(1.0, -1.0, 1.0)).is_valid());
        assert!(!BoxSolid::new(Vector3::new(f64::NAN, 1.0, 1.0)).is_valid());
    }

    #[test]
    fn bounding_box_follows_translation() {
        let solid = BoxSolid::new(Vector3::new(100.0, 1000.0, 1000.0));
        let aabb = solid.bounding_box(&Transform3D::translation(900.0, 0.0, 0.0));
        assert_eq!(aabb.min, Point3::new(800.0, -1000.0, -1000.0));
        assert_eq!(aabb.max, Point3::new(1000.0, 1000.0, 1000.0));
    }

    #[test]
    fn bounding_box_grows_under_rotation() {
        let solid = BoxSolid::cube(1.0);
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4);
        let aabb = solid.bounding_box(&Transform3D::new(rotation, Vector3::zeros()));
        let expected = 2.0_f64.sqrt();
        assert!((aabb.max.x - expected).abs() < 1e-12);
        assert!((aabb.max.y - expected).abs() < 1e-12);
        assert!((aabb.max.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = BoxSolid::cube(1.0).bounding_box(&Transform3D::identity());
        let b = BoxSolid::cube(1.0).bounding_box(&Transform3D::translation(2.0, 0.0, 0.0));
        assert!(!a.intersects(&b, 1e-9));
    }

    #[test]
    fn overlapping_boxes_intersect_symmetrically() {
        let a = BoxSolid::cube(1.0).bounding_box(&Transform3D::identity());
        let b = BoxSolid::cube(1.0).bounding_box(&Transform3D::translation(1.5, 0.5, 0.0));
        assert!(a.intersects(&b, 1e-9));
        assert!(b.intersects(&a, 1e-9));
    }
}
