//! Axis shear transforms with alpha-based autocropping.
//!
//! Each function displaces pixels proportionally to their position along one
//! axis, sizes the output canvas so no content is lost, resamples with
//! bicubic interpolation and a transparent border, then crops the result to
//! its opaque footprint plus `pad` pixels.
//!
//! The shear factor `k` is the tangent of the slant angle; the isometric
//! pipeline uses `tan(30°)`.

use isogen_image::{Image, ImageError, ImageSize};

use crate::crop::autocrop_alpha;
use crate::interpolation::InterpolationMode;
use crate::warp::warp_affine;

/// Round half to even, then clamp to a minimum dimension of one pixel.
pub(crate) fn rounded_dim(v: f64) -> usize {
    (v.round_ties_even() as usize).max(1)
}

/// Round half to even without the dimension clamp, for canvas offsets.
fn rounded_offset(v: f64) -> usize {
    v.round_ties_even() as usize
}

fn sheared(
    src: &Image<f32, 4>,
    size: ImageSize,
    m: &[f32; 6],
    pad: usize,
) -> Result<Image<f32, 4>, ImageError> {
    let mut dst = Image::from_size_val(size, 0.0)?;
    warp_affine(src, &mut dst, m, InterpolationMode::Bicubic)?;
    autocrop_alpha(&dst, pad)
}

/// Shear along the y axis, columns further right shifting further.
///
/// The canvas grows to `round(h + k*w)` rows; the sampled source position for
/// a destination pixel is `y_src = y_dst - k*x_dst`.
pub fn shear_y_up(src: &Image<f32, 4>, k: f64, pad: usize) -> Result<Image<f32, 4>, ImageError> {
    let (w, h) = (src.width(), src.height());
    let size = ImageSize {
        width: w,
        height: rounded_dim(h as f64 + k * w as f64),
    };
    let m = [1.0, 0.0, 0.0, k as f32, 1.0, 0.0];
    sheared(src, size, &m, pad)
}

/// Shear along the y axis in the opposite sense of [`shear_y_up`].
///
/// The content is offset down by `round(k*w)` rows so the sheared image stays
/// on canvas; the inverse sampling is `y_src = k*x_dst + y_dst - offset`.
pub fn shear_y_down(src: &Image<f32, 4>, k: f64, pad: usize) -> Result<Image<f32, 4>, ImageError> {
    let (w, h) = (src.width(), src.height());
    let offset = rounded_offset(k * w as f64);
    let size = ImageSize {
        width: w,
        height: h + offset,
    };
    let m = [1.0, 0.0, 0.0, -(k as f32), 1.0, offset as f32];
    sheared(src, size, &m, pad)
}

/// Shear along the x axis, rows further down shifting further right.
///
/// The canvas grows to `round(w + k*h)` columns; the sampled source position
/// is `x_src = x_dst - k*y_dst`.
pub fn shear_x_right(src: &Image<f32, 4>, k: f64, pad: usize) -> Result<Image<f32, 4>, ImageError> {
    let (w, h) = (src.width(), src.height());
    let size = ImageSize {
        width: rounded_dim(w as f64 + k * h as f64),
        height: h,
    };
    let m = [1.0, k as f32, 0.0, 0.0, 1.0, 0.0];
    sheared(src, size, &m, pad)
}

/// Shear along the x axis in the opposite sense of [`shear_x_right`].
///
/// The content is offset right by `round(k*h)` columns; the inverse sampling
/// is `x_src = k*y_dst + x_dst - offset`.
pub fn shear_x_left(src: &Image<f32, 4>, k: f64, pad: usize) -> Result<Image<f32, 4>, ImageError> {
    let (w, h) = (src.width(), src.height());
    let offset = rounded_offset(k * h as f64);
    let size = ImageSize {
        width: w + offset,
        height: h,
    };
    let m = [1.0, -(k as f32), offset as f32, 0.0, 1.0, 0.0];
    sheared(src, size, &m, pad)
}
