use super::ids::VolumeId;
use super::transform::Transform3D;
use nalgebra::Vector3;

/// A positioned instance of a logical volume inside its mother.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Physical name of this instance (e.g. "plate").
    pub name: String,
    /// The placed logical volume.
    pub volume: VolumeId,
    /// The mother volume; `None` only for the world placement.
    pub mother: Option<VolumeId>,
    /// Daughter frame relative to the mother frame.
    pub transform: Transform3D,
    /// Copy index, distinguishing repeated placements of the same volume.
    pub copy_number: i32,
    /// Whether overlap checking was requested for this placement.
    pub check_overlaps: bool,
}

/// Options for [`super::scene::SceneBuilder::place`].
///
/// The defaults are an identity transform, copy number 0, no overlap check and
/// a physical name equal to the placed volume's name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementRequest {
    pub(crate) name: Option<String>,
    pub(crate) transform: Transform3D,
    pub(crate) copy_number: i32,
    pub(crate) check_overlaps: bool,
}

impl PlacementRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request translated to `position` without rotation.
    pub fn at(position: Vector3<f64>) -> Self {
        Self::new().transform(Transform3D::translation(position.x, position.y, position.z))
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
    pub fn transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }
    pub fn copy_number(mut self, copy_number: i32) -> Self {
        self.copy_number = copy_number;
        self
    }
    pub fn check_overlaps(mut self, check: bool) -> Self {
        self.check_overlaps = check;
        self
    }
}
