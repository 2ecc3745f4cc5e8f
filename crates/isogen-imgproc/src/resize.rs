use isogen_image::{Image, ImageError};

use crate::interpolation::{grid::meshgrid_from_fn, interpolate_pixel, InterpolationMode};
use crate::parallel;

/// Resize an image to a new size.
///
/// The function resizes an image to a new size using the specified
/// interpolation mode. The output size is taken from `dst`; each destination
/// pixel samples the source over an evenly spaced grid covering the full
/// source extent, so the first and last samples land exactly on the source
/// corners.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use isogen_image::{Image, ImageSize};
/// use isogen_imgproc::interpolation::InterpolationMode;
/// use isogen_imgproc::resize::resize_native;
///
/// let image = Image::<_, 4>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 4],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 4>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Bicubic,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 4);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.width() == 0 || src.height() == 0 {
        return Err(ImageError::ZeroSizeImage(src.width(), src.height()));
    }
    if dst.width() == 0 || dst.height() == 0 {
        return Err(ImageError::ZeroSizeImage(dst.width(), dst.height()));
    }

    // a one pixel axis collapses onto the source origin
    let step_x = if dst.width() > 1 {
        (src.width() - 1) as f32 / (dst.width() - 1) as f32
    } else {
        0.0
    };
    let step_y = if dst.height() > 1 {
        (src.height() - 1) as f32 / (dst.height() - 1) as f32
    } else {
        0.0
    };

    let (map_x, map_y) = meshgrid_from_fn(dst.cols(), dst.rows(), |x, y| {
        Ok((x as f32 * step_x, y as f32 * step_y))
    })?;

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        dst_pixel.copy_from_slice(&interpolate_pixel(src, x, y, interpolation));
    });

    Ok(())
}
