use isogen_image::Image;

/// Cubic convolution weight with a = -0.5 (Catmull-Rom).
///
/// The weights for the four taps around a sampling position sum to one, and
/// at integer positions the kernel reduces to the identity.
fn cubic_weight(t: f32) -> f32 {
    const A: f32 = -0.5;

    let t = t.abs();
    if t <= 1.0 {
        ((A + 2.0) * t - (A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        (((t - 5.0) * t + 8.0) * t - 4.0) * A
    } else {
        0.0
    }
}

/// Kernel for bicubic interpolation
///
/// Interpolates over the 4x4 neighborhood of `(u, v)`; taps past the image
/// border are clamped to the edge.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bicubic_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows() as isize, image.cols() as isize);

    let iu = u.floor() as isize;
    let iv = v.floor() as isize;

    let frac_u = u - u.floor();
    let frac_v = v - v.floor();

    let data = image.as_slice();

    let mut pixel = [0.0; C];
    for j in -1..=2isize {
        let wy = cubic_weight(j as f32 - frac_v);
        if wy == 0.0 {
            continue;
        }
        let y = (iv + j).clamp(0, rows - 1);
        for i in -1..=2isize {
            let wx = cubic_weight(i as f32 - frac_u);
            if wx == 0.0 {
                continue;
            }
            let x = (iu + i).clamp(0, cols - 1);

            let base = ((y * cols + x) as usize) * C;
            let tap = &data[base..base + C];

            let w = wx * wy;
            for k in 0..C {
                pixel[k] += w * tap[k];
            }
        }
    }

    pixel
}

/// Kernel for bicubic interpolation with a transparent border.
///
/// Taps outside the image contribute nothing, the same as sampling a fully
/// transparent pixel (alpha = 0, color = 0). Warped content therefore fades
/// out at the source boundary instead of smearing the edge pixels, which
/// keeps the alpha bounding box of the output truthful.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bicubic_interpolation_transparent<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows() as isize, image.cols() as isize);

    let iu = u.floor() as isize;
    let iv = v.floor() as isize;

    let frac_u = u - u.floor();
    let frac_v = v - v.floor();

    let data = image.as_slice();

    let mut pixel = [0.0; C];
    for j in -1..=2isize {
        let y = iv + j;
        if y < 0 || y >= rows {
            continue;
        }
        let wy = cubic_weight(j as f32 - frac_v);
        if wy == 0.0 {
            continue;
        }
        for i in -1..=2isize {
            let x = iu + i;
            if x < 0 || x >= cols {
                continue;
            }
            let wx = cubic_weight(i as f32 - frac_u);
            if wx == 0.0 {
                continue;
            }

            let base = ((y * cols + x) as usize) * C;
            let tap = &data[base..base + C];

            let w = wx * wy;
            for k in 0..C {
                pixel[k] += w * tap[k];
            }
        }
    }

    pixel
}
