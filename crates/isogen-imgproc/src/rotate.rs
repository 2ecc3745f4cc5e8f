//! Image rotation about the center with canvas expansion.

use isogen_image::{Image, ImageError, ImageSize};

use crate::interpolation::InterpolationMode;
use crate::warp::{get_rotation_matrix2d, warp_affine};

/// Rotate an image about its center, expanding the canvas to fit.
///
/// Positive angles rotate counter-clockwise in the y-down image frame. The
/// output canvas bounds the rotated rectangle (extents rounded up, so no
/// corner is clipped); the area not covered by the source stays fully
/// transparent. Resampling is bicubic.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle_deg` - The rotation angle in degrees.
///
/// # Returns
///
/// The rotated image on its expanded canvas.
pub fn rotate_expand(src: &Image<f32, 4>, angle_deg: f64) -> Result<Image<f32, 4>, ImageError> {
    let (w, h) = (src.width() as f64, src.height() as f64);

    let rad = angle_deg.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());

    let new_w = (w * cos + h * sin).ceil() as usize;
    let new_h = (w * sin + h * cos).ceil() as usize;

    let mut m = get_rotation_matrix2d(
        (w as f32 / 2.0, h as f32 / 2.0),
        angle_deg as f32,
        1.0,
    );
    // recenter the rotated content on the expanded canvas
    m[2] += (new_w as f32 - w as f32) / 2.0;
    m[5] += (new_h as f32 - h as f32) / 2.0;

    let mut dst = Image::from_size_val(
        ImageSize {
            width: new_w,
            height: new_h,
        },
        0.0,
    )?;
    warp_affine(src, &mut dst, &m, InterpolationMode::Bicubic)?;

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use isogen_image::{Image, ImageError, ImageSize};

    #[test]
    fn rotate_expand_bounds_the_rectangle() -> Result<(), ImageError> {
        let src = Image::<f32, 4>::from_size_val(
            ImageSize {
                width: 100,
                height: 50,
            },
            255.0,
        )?;

        let out = super::rotate_expand(&src, 30.0)?;

        // 100*cos30 + 50*sin30 = 111.6 -> 112, 100*sin30 + 50*cos30 = 93.3 -> 94
        assert_eq!(out.width(), 112);
        assert_eq!(out.height(), 94);

        Ok(())
    }

    #[test]
    fn rotate_expand_keeps_opaque_mass() -> Result<(), ImageError> {
        let src = Image::<f32, 4>::from_size_val(
            ImageSize {
                width: 40,
                height: 40,
            },
            255.0,
        )?;

        let out = super::rotate_expand(&src, 30.0)?;

        // rotation preserves area, so the opaque pixel count stays close to
        // the source area despite border feathering
        let opaque = out
            .as_slice()
            .chunks_exact(4)
            .filter(|p| p[3] > 128.0)
            .count();
        let area = 40 * 40;
        assert!(opaque as f64 > area as f64 * 0.9);
        assert!((opaque as f64) < area as f64 * 1.1);

        Ok(())
    }

    #[test]
    fn rotate_expand_is_counter_clockwise() -> Result<(), ImageError> {
        // a single opaque column on the right half; after +90° it must end up
        // in the top half (counter-clockwise in the y-down frame)
        let mut src = Image::<f32, 4>::from_size_val(
            ImageSize {
                width: 9,
                height: 9,
            },
            0.0,
        )?;
        for y in 0..9 {
            let base = (y * 9 + 8) * 4;
            src.as_slice_mut()[base..base + 4].copy_from_slice(&[255.0; 4]);
        }

        let out = super::rotate_expand(&src, 90.0)?;

        // centroid of the opaque mass
        let mut sum_y = 0.0f64;
        let mut count = 0.0f64;
        for y in 0..out.height() {
            for x in 0..out.width() {
                let alpha = *out.get([y, x, 3]).unwrap_or(&0.0);
                if alpha > 128.0 {
                    sum_y += y as f64;
                    count += 1.0;
                }
            }
        }
        assert!(count > 0.0);
        let centroid_y = sum_y / count;
        assert!(centroid_y < out.height() as f64 / 2.0 - 1.0);

        Ok(())
    }
}
