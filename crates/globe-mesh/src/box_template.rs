//! Unit box used as the template for every cell.
//!
//! Faces are emitted in the order +X, -X, +Y, -Y, +Z, -Z, each as four
//! vertices and two triangles, so every face carries its own flat normal
//! and a full `[0, 1]` uv square.

/// Vertices per box (6 faces x 4 corners).
pub const BOX_VERTICES: usize = 24;

/// Indices per box (6 faces x 2 triangles x 3).
pub const BOX_INDICES: usize = 36;

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// Positions, normals, uvs and indices of a single box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxTemplate {
    pub positions: [[f32; 3]; BOX_VERTICES],
    pub normals: [[f32; 3]; BOX_VERTICES],
    pub uvs: [[f32; 2]; BOX_VERTICES],
    pub indices: [u32; BOX_INDICES],
}

impl BoxTemplate {
    /// A 1x1x1 box centred on the origin.
    pub fn unit() -> Self {
        let mut template = Self {
            positions: [[0.0; 3]; BOX_VERTICES],
            normals: [[0.0; 3]; BOX_VERTICES],
            uvs: [[0.0; 2]; BOX_VERTICES],
            indices: [0; BOX_INDICES],
        };

        // (u axis, v axis, w axis, u dir, v dir, side of w)
        let faces: [(usize, usize, usize, f32, f32, f32); 6] = [
            (Z, Y, X, -1.0, -1.0, 1.0),
            (Z, Y, X, 1.0, -1.0, -1.0),
            (X, Z, Y, 1.0, 1.0, 1.0),
            (X, Z, Y, 1.0, -1.0, -1.0),
            (X, Y, Z, 1.0, -1.0, 1.0),
            (X, Y, Z, -1.0, -1.0, -1.0),
        ];

        for (face, &(u, v, w, udir, vdir, side)) in faces.iter().enumerate() {
            let base = face * 4;
            for iy in 0..2 {
                for ix in 0..2 {
                    let corner = base + iy * 2 + ix;
                    let mut position = [0.0f32; 3];
                    position[u] = (ix as f32 - 0.5) * udir;
                    position[v] = (iy as f32 - 0.5) * vdir;
                    position[w] = 0.5 * side;

                    let mut normal = [0.0f32; 3];
                    normal[w] = side;

                    template.positions[corner] = position;
                    template.normals[corner] = normal;
                    template.uvs[corner] = [ix as f32, 1.0 - iy as f32];
                }
            }

            // corners: a=(0,0) b=(0,1) c=(1,1) d=(1,0)
            let b = base as u32;
            let (a, bb, c, d) = (b, b + 2, b + 3, b + 1);
            template.indices[face * 6..face * 6 + 6].copy_from_slice(&[a, bb, d, bb, c, d]);
        }

        template
    }

    /// The unit box shifted so it spans `z in [0, 1]`.
    ///
    /// Scaling this along z extrudes outward from the base instead of
    /// growing in both directions.
    pub fn extruded() -> Self {
        let mut template = Self::unit();
        for position in template.positions.iter_mut() {
            position[Z] += 0.5;
        }
        template
    }
}
