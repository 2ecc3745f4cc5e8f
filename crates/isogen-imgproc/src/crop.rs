use isogen_image::{Image, ImageError, ImageSize};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
///
/// # Examples
///
/// ```rust
/// use isogen_image::{Image, ImageSize};
/// use isogen_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if x + dst.width() > src.width() || y + dst.height() > src.height() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            x + dst.width(),
            y + dst.height(),
        ));
    }

    let dst_cols = dst.cols();
    let src_cols = src.cols();
    let src_slice = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src_cols * C + x * C;
            let src_slice = &src_slice[offset..offset + dst_cols * C];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}

/// Crop an image to the bounding box of its opaque content.
///
/// Scans the alpha channel (the last channel) for values greater than zero,
/// expands the resulting bounding box by `pad` pixels on each side clamped to
/// the image bounds, and returns the cropped sub-image. An image with no
/// opaque pixel is returned unchanged.
///
/// # Arguments
///
/// * `src` - The source image, alpha in the last channel.
/// * `pad` - Transparent margin kept around the opaque content, in pixels.
///
/// # Returns
///
/// The cropped image. Both output dimensions are at least 1 and never exceed
/// the input dimensions.
pub fn autocrop_alpha<T, const C: usize>(
    src: &Image<T, C>,
    pad: usize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + PartialOrd + Send + Sync,
{
    let (width, height) = (src.width(), src.height());
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroSizeImage(width, height));
    }

    let zero = T::default();
    let data = src.as_slice();

    // bounding box of alpha > 0, exclusive upper bounds
    let mut x0 = width;
    let mut y0 = height;
    let mut x1 = 0;
    let mut y1 = 0;

    for y in 0..height {
        let row = &data[y * width * C..(y + 1) * width * C];
        for x in 0..width {
            if row[x * C + C - 1] > zero {
                x0 = x0.min(x);
                y0 = y0.min(y);
                x1 = x1.max(x + 1);
                y1 = y1.max(y + 1);
            }
        }
    }

    if x1 == 0 {
        // fully transparent, nothing to crop against
        return Ok(src.clone());
    }

    let x0 = x0.saturating_sub(pad);
    let y0 = y0.saturating_sub(pad);
    let x1 = (x1 + pad).min(width);
    let y1 = (y1 + pad).min(height);

    let mut dst = Image::from_size_val(
        ImageSize {
            width: x1 - x0,
            height: y1 - y0,
        },
        zero,
    )?;
    crop_image(src, &mut dst, x0, y0)?;

    Ok(dst)
}
