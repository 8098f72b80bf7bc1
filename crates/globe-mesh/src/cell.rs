//! Placement of a single grid cell on the sphere.

use crate::color::Hsl;
use crate::config::SynthesisConfig;
use grid_common::{GridHeader, HueRange};
use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Vector3};

/// Transform and colour of one cell's box.
///
/// Built per surviving cell during synthesis and flattened straight into
/// the merged buffers.
#[derive(Debug, Clone)]
pub struct CellBox {
    pub row: usize,
    pub col: usize,
    /// Normalized magnitude used for height and colour.
    pub amount: f32,
    /// Local box space to sphere space.
    pub transform: Matrix4<f64>,
    /// Inverse-transpose of the linear part, for normals.
    pub normal_transform: Matrix3<f64>,
    pub color: [u8; 3],
}

impl CellBox {
    /// Place the cell at `(row, col)` with magnitude `amount`.
    ///
    /// The column (plus the header's x offset) is the longitude and the
    /// row (plus the y offset) the latitude, both in degrees. The box is
    /// turned about the vertical axis by longitude, then about the turned
    /// horizontal axis by latitude, pushed out to the sphere radius and
    /// scaled to its footprint and height.
    pub fn place(
        row: usize,
        col: usize,
        amount: f32,
        header: &GridHeader,
        hues: &HueRange,
        config: &SynthesisConfig,
    ) -> Self {
        let lon = (col as f64 + header.xllcorner + config.lon_offset_deg).to_radians();
        let lat = (row as f64 + header.yllcorner + config.lat_offset_deg).to_radians();

        let lon_rot = Rotation3::from_axis_angle(&Vector3::y_axis(), lon);
        let lat_rot = Rotation3::from_axis_angle(&Vector3::x_axis(), lat);
        let rotation = lon_rot * lat_rot;

        let scale = Vector3::new(config.footprint, config.footprint, config.height_at(amount));

        let transform = rotation.to_homogeneous()
            * Matrix4::new_translation(&Vector3::new(0.0, 0.0, config.radius))
            * Matrix4::new_nonuniform_scaling(&scale);

        // (R * S)^-T == R * S^-1 for a rotation R and diagonal S
        let normal_transform =
            rotation.into_inner() * Matrix3::from_diagonal(&scale.map(|s| 1.0 / s));

        let color = Hsl::for_amount(hues, amount, config).to_rgb8();

        Self {
            row,
            col,
            amount,
            transform,
            normal_transform,
            color,
        }
    }

    pub fn transform_position(&self, p: [f32; 3]) -> [f32; 3] {
        let out = self
            .transform
            .transform_point(&Point3::new(p[0] as f64, p[1] as f64, p[2] as f64));
        [out.x as f32, out.y as f32, out.z as f32]
    }

    pub fn transform_normal(&self, n: [f32; 3]) -> [f32; 3] {
        let out = (self.normal_transform * Vector3::new(n[0] as f64, n[1] as f64, n[2] as f64))
            .normalize();
        [out.x as f32, out.y as f32, out.z as f32]
    }

    /// Centre of the box's base on the sphere surface.
    pub fn anchor(&self) -> [f32; 3] {
        self.transform_position([0.0, 0.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{assert_approx_eq, assert_vec3_approx_eq};

    fn flat_config() -> SynthesisConfig {
        SynthesisConfig {
            lon_offset_deg: 0.0,
            lat_offset_deg: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_origin_cell_faces_positive_z() {
        let cell = CellBox::place(
            0,
            0,
            0.0,
            &GridHeader::default(),
            &HueRange::new(0.0, 1.0),
            &flat_config(),
        );
        assert_vec3_approx_eq!(cell.anchor(), [0.0, 0.0, 1.0], 1e-5);
        assert_vec3_approx_eq!(cell.transform_normal([0.0, 0.0, 1.0]), [0.0, 0.0, 1.0], 1e-5);
    }

    #[test]
    fn test_longitude_turns_towards_x() {
        let cell = CellBox::place(
            0,
            90,
            0.0,
            &GridHeader::default(),
            &HueRange::new(0.0, 1.0),
            &flat_config(),
        );
        assert_vec3_approx_eq!(cell.anchor(), [1.0, 0.0, 0.0], 1e-5);
    }

    #[test]
    fn test_latitude_uses_row_and_offset() {
        let header = GridHeader {
            yllcorner: -90.0,
            ..Default::default()
        };
        // row 0 + (-90) => rotate -90 degrees about x: +z -> +y
        let cell = CellBox::place(0, 0, 0.0, &header, &HueRange::new(0.0, 1.0), &flat_config());
        assert_vec3_approx_eq!(cell.anchor(), [0.0, 1.0, 0.0], 1e-5);
    }

    #[test]
    fn test_default_offsets_move_origin() {
        let cell = CellBox::place(
            0,
            0,
            0.0,
            &GridHeader::default(),
            &HueRange::new(0.0, 1.0),
            &SynthesisConfig::default(),
        );
        let [x, y, z] = cell.anchor();
        assert!((x * x + y * y + z * z - 1.0).abs() < 1e-5);
        // +90 degrees of longitude puts the box on the +x side
        assert!(x > 0.0);
    }

    #[test]
    fn test_height_grows_with_amount() {
        let config = flat_config();
        let hues = HueRange::new(0.0, 1.0);
        let header = GridHeader::default();
        let low = CellBox::place(0, 0, 0.0, &header, &hues, &config);
        let high = CellBox::place(0, 0, 1.0, &header, &hues, &config);

        let top = [0.0, 0.0, 1.0];
        assert_approx_eq!(low.transform_position(top)[2], 1.01, 1e-5);
        assert_approx_eq!(high.transform_position(top)[2], 1.5, 1e-5);
    }
}
