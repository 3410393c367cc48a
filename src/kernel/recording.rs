use std::f64::consts::TAU;

use slotmap::SlotMap;

use crate::error::{OperationError, Result};
use crate::geometry::{CrossSection, OrientationFrame};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

use super::SweepKernel;

/// Number of outline samples used for circular sections.
const CIRCLE_SEGMENTS: u32 = 16;

slotmap::new_key_type! {
    /// Unique identifier for a path in the recording kernel.
    pub struct PathId;
}

slotmap::new_key_type! {
    /// Unique identifier for a cross-section in the recording kernel.
    pub struct SectionId;
}

slotmap::new_key_type! {
    /// Unique identifier for a swept solid in the recording kernel.
    pub struct SolidId;
}

/// A path curve given by its interpolation points.
#[derive(Debug, Clone)]
pub struct PathData {
    /// Points the path passes through, in order.
    pub points: Vec<Point3>,
}

/// A planar cross-section and its accumulated placement.
#[derive(Debug, Clone)]
pub struct SectionData {
    /// Kernel descriptor the section was created from.
    pub descriptor: String,
    /// Outline in reference coordinates (`z = 0` plane, around the origin).
    pub outline: Vec<Point3>,
    /// Placement applied so far.
    pub transform: Matrix4,
}

impl SectionData {
    /// Outline after placement.
    #[must_use]
    pub fn placed_outline(&self) -> Vec<Point3> {
        self.outline
            .iter()
            .map(|p| self.transform.transform_point(p))
            .collect()
    }

    /// Plane normal after placement.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.transform
            .transform_vector(&OrientationFrame::reference_normal())
    }

    /// Thickness direction after placement.
    #[must_use]
    pub fn thickness_direction(&self) -> Vector3 {
        self.transform
            .transform_vector(&OrientationFrame::reference_thickness())
    }

    /// Section center after placement.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.transform.transform_point(&Point3::origin())
    }
}

/// Result of sweeping a section along a path.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// The section as it was placed at the start of the path.
    pub section: SectionData,
    /// The sweep path.
    pub path: PathData,
    /// Material tag, once assigned.
    pub material: Option<String>,
}

/// In-memory kernel that records sweep inputs instead of building solids.
///
/// It keeps paths, sections and solids in generational arenas and applies
/// every placement to the section outline, which makes it suitable for
/// checking what a real kernel would receive.
#[derive(Debug, Default)]
pub struct RecordingKernel {
    paths: SlotMap<PathId, PathData>,
    sections: SlotMap<SectionId, SectionData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl RecordingKernel {
    /// Creates a new, empty kernel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the path data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the kernel.
    pub fn path(&self, id: PathId) -> Result<&PathData> {
        self.paths.get(id).ok_or_else(|| not_found("path"))
    }

    /// Returns a reference to the section data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the kernel.
    pub fn section(&self, id: SectionId) -> Result<&SectionData> {
        self.sections.get(id).ok_or_else(|| not_found("section"))
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the kernel.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData> {
        self.solids.get(id).ok_or_else(|| not_found("solid"))
    }

    /// Number of swept solids.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }
}

impl SweepKernel for RecordingKernel {
    type Path = PathId;
    type Section = SectionId;
    type Solid = SolidId;

    fn create_path(&mut self, points: &[Point3]) -> Result<PathId> {
        if points.len() < 2 {
            return Err(OperationError::Kernel(format!(
                "a path needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(self.paths.insert(PathData {
            points: points.to_vec(),
        }))
    }

    fn create_cross_section(&mut self, cross_section: &CrossSection) -> Result<SectionId> {
        Ok(self.sections.insert(SectionData {
            descriptor: cross_section.kernel_descriptor(),
            outline: reference_outline(cross_section),
            transform: Matrix4::identity(),
        }))
    }

    fn orient_cross_section(&mut self, section: &SectionId, frame: &OrientationFrame) -> Result<()> {
        let data = self
            .sections
            .get_mut(*section)
            .ok_or_else(|| not_found("section"))?;
        data.transform = frame.transform() * data.transform;
        Ok(())
    }

    fn sweep(&mut self, section: SectionId, path: PathId) -> Result<SolidId> {
        let section = self.sections.remove(section).ok_or_else(|| not_found("section"))?;
        let path = self.paths.remove(path).ok_or_else(|| not_found("path"))?;

        let start = path.points[0];
        if (section.center() - start).norm() > TOLERANCE * start.coords.norm().max(1.0) {
            return Err(OperationError::Kernel(
                "cross-section is not placed at the start of the path".into(),
            )
            .into());
        }

        Ok(self.solids.insert(SolidData {
            section,
            path,
            material: None,
        }))
    }

    fn assign_material(&mut self, solid: &SolidId, tag: &str) -> Result<()> {
        let data = self.solids.get_mut(*solid).ok_or_else(|| not_found("solid"))?;
        data.material = Some(tag.to_owned());
        Ok(())
    }
}

fn not_found(entity: &str) -> crate::error::CoilError {
    OperationError::Kernel(format!("{entity} not found")).into()
}

/// Section outline around the origin in the `z = 0` plane.
///
/// Rectangles span their thickness along x and their width along y.
fn reference_outline(cross_section: &CrossSection) -> Vec<Point3> {
    match *cross_section {
        CrossSection::Circle { radius } => (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let phi = TAU * f64::from(i) / f64::from(CIRCLE_SEGMENTS);
                Point3::new(radius * phi.cos(), radius * phi.sin(), 0.0)
            })
            .collect(),
        CrossSection::Rectangle { width, thickness } => {
            let (hx, hy) = (0.5 * thickness, 0.5 * width);
            vec![
                Point3::new(-hx, -hy, 0.0),
                Point3::new(hx, -hy, 0.0),
                Point3::new(hx, hy, 0.0),
                Point3::new(-hx, hy, 0.0),
            ]
        }
    }
}
