use isogen_image::ImageError;

/// Create x and y coordinate maps of shape (rows, cols) from a generator.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid
/// * `rows` - The number of rows indicating the height of the grid
/// * `f` - Generator mapping a destination `(x, y)` pixel position to the
///   source coordinates to sample from
///
/// # Returns
///
/// A pair of row major maps containing the x and y source coordinates
pub(crate) fn meshgrid_from_fn(
    cols: usize,
    rows: usize,
    f: impl Fn(usize, usize) -> Result<(f32, f32), ImageError>,
) -> Result<(Vec<f32>, Vec<f32>), ImageError> {
    let mut map_x = Vec::with_capacity(rows * cols);
    let mut map_y = Vec::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = f(c, r)?;
            map_x.push(x);
            map_y.push(y);
        }
    }

    Ok((map_x, map_y))
}

#[cfg(test)]
mod tests {
    use isogen_image::ImageError;

    #[test]
    fn test_meshgrid_from_fn() -> Result<(), ImageError> {
        let (map_x, map_y) =
            super::meshgrid_from_fn(3, 2, |x, y| Ok((x as f32, y as f32)))?;

        assert_eq!(map_x, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        assert_eq!(map_y, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        Ok(())
    }
}
