use crate::core::{LinearScale, PixelPoint};

/// Row-major homogeneous 2D affine matrix.
pub type Matrix3 = [[f64; 3]; 3];

#[must_use]
pub fn distance_between_points(a: PixelPoint, b: PixelPoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Builds one matrix equivalent to applying `x_scale` and `y_scale` per point.
///
/// Expands to `translate(mid_range) * scale(range_span / domain_span) * translate(-mid_domain)`
/// on each axis. The final step into clip space (`[-1, 1]`) is left to the GPU.
#[must_use]
pub fn window_transform(x_scale: LinearScale, y_scale: LinearScale) -> Matrix3 {
    let (x_multi, x_offset) = axis_terms(x_scale);
    let (y_multi, y_offset) = axis_terms(y_scale);

    [
        [x_multi, 0.0, x_offset],
        [0.0, y_multi, y_offset],
        [0.0, 0.0, 1.0],
    ]
}

fn axis_terms(scale: LinearScale) -> (f64, f64) {
    let (d0, d1) = scale.domain();
    let (r0, r1) = scale.range();
    let mid_domain = (d0 + d1) / 2.0;
    let mid_range = (r0 + r1) / 2.0;
    let multi = scale.range_span() / scale.domain_span();
    (multi, -multi * mid_domain + mid_range)
}

#[must_use]
pub fn flatten_matrix(matrix: Matrix3) -> [f64; 9] {
    let mut out = [0.0; 9];
    for (row_index, row) in matrix.iter().enumerate() {
        out[row_index * 3..row_index * 3 + 3].copy_from_slice(row);
    }
    out
}

#[must_use]
pub fn apply_matrix(matrix: Matrix3, x: f64, y: f64) -> PixelPoint {
    PixelPoint::new(
        matrix[0][0] * x + matrix[0][1] * y + matrix[0][2],
        matrix[1][0] * x + matrix[1][1] * y + matrix[1][2],
    )
}
