use rayon::prelude::*;

use isogen_image::Image;

/// Apply a function to each pixel for grid sampling in parallel.
///
/// `map_x` and `map_y` hold one source coordinate per destination pixel, row
/// major with the same shape as `dst`. Each destination row is written
/// independently, so the result does not depend on scheduling order.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f32, C>,
    map_x: &[f32],
    map_y: &[f32],
    f: impl Fn(&f32, &f32, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();
    let dst_slice = dst.as_slice_mut();

    dst_slice
        .par_chunks_exact_mut(C * cols)
        .zip(map_x.par_chunks_exact(cols))
        .zip(map_y.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}
