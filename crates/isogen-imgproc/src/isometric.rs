//! The isometric variant pipeline.
//!
//! Derives a fixed set of 24 variants from one RGBA image: four width levels,
//! each swept through six directional transforms (shear up/down/left/right
//! and the two horizontal shears rotated by 30° counter-clockwise). All
//! intermediate resampling is bicubic; every variant is cropped to its opaque
//! footprint plus [`CROP_PAD`] pixels.

use isogen_image::{Image, ImageError, ImageSize};

use crate::crop::autocrop_alpha;
use crate::interpolation::InterpolationMode;
use crate::resize::resize_native;
use crate::rotate::rotate_expand;
use crate::shear::{rounded_dim, shear_x_left, shear_x_right, shear_y_down, shear_y_up};

/// Projection angle of the isometric look, in degrees (counter-clockwise).
pub const PROJECTION_ANGLE_DEG: f64 = 30.0;

/// Transparent margin kept around the opaque content after cropping, in pixels.
pub const CROP_PAD: usize = 8;

/// A horizontal scale level swept by [`process`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthVariant {
    /// Label used in the output file names.
    pub label: &'static str,
    /// Factor applied to the source width.
    pub factor: f64,
}

/// The four width levels, in output enumeration order.
pub const WIDTH_VARIANTS: [WidthVariant; 4] = [
    WidthVariant {
        label: "very_narrow",
        factor: 0.60,
    },
    WidthVariant {
        label: "narrow",
        factor: 0.80,
    },
    WidthVariant {
        label: "medium",
        factor: 1.00,
    },
    WidthVariant {
        label: "wide",
        factor: 1.25,
    },
];

/// Directional transform applied to each width level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Vertical shear, right side sweeping up.
    Up,
    /// Vertical shear, right side sweeping down.
    Down,
    /// Horizontal shear to the left.
    Left,
    /// Horizontal shear to the right.
    Right,
    /// Left shear rotated 30° counter-clockwise.
    LeftCcw,
    /// Right shear rotated 30° counter-clockwise.
    RightCcw,
}

/// The six directions, in output enumeration order.
pub const DIRECTIONS: [Direction; 6] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::LeftCcw,
    Direction::RightCcw,
];

impl Direction {
    /// Output file name for this direction and width label.
    pub fn file_name(&self, label: &str) -> String {
        match self {
            Direction::Up => format!("isometric_up_{label}.png"),
            Direction::Down => format!("isometric_down_{label}.png"),
            Direction::Left => format!("isometric_left_{label}.png"),
            Direction::Right => format!("isometric_right_{label}.png"),
            Direction::LeftCcw => format!("isometric_left_ccw30_{label}.png"),
            Direction::RightCcw => format!("isometric_right_ccw30_{label}.png"),
        }
    }
}

/// A single derived variant with the file name the caller should store it under.
pub struct NamedOutput {
    /// File name following the `isometric_<direction>_<label>.png` convention.
    pub name: String,
    /// The derived image.
    pub image: Image<u8, 4>,
}

/// Derive the 24 isometric variants of an RGBA image.
///
/// For each width level, in declaration order:
///
/// 1. scale the width by the level factor (bicubic),
/// 2. compress the height by `cos(30°)` (bicubic),
/// 3. emit the six directional variants in [`DIRECTIONS`] order.
///
/// The rotated variants rotate the already cropped left/right shears, as a
/// sprite author would stack the steps manually. Output order and names are
/// stable; callers may rely on positional identity.
///
/// # Arguments
///
/// * `src` - The input image; alpha is preserved through every transform.
///
/// # Returns
///
/// The 24 named variants.
///
/// # Errors
///
/// Returns [`ImageError::ZeroSizeImage`] when the input has no pixels.
pub fn process(src: &Image<u8, 4>) -> Result<Vec<NamedOutput>, ImageError> {
    let (w0, h0) = (src.width(), src.height());
    if w0 == 0 || h0 == 0 {
        return Err(ImageError::ZeroSizeImage(w0, h0));
    }

    let rad = PROJECTION_ANGLE_DEG.to_radians();
    let scale_y = rad.cos();
    let k = rad.tan();

    let src = src.cast::<f32>()?;

    let mut outputs = Vec::with_capacity(WIDTH_VARIANTS.len() * DIRECTIONS.len());
    for variant in WIDTH_VARIANTS.iter() {
        // 1) scale the horizontal axis by the width level
        let w1 = rounded_dim(w0 as f64 * variant.factor);
        let mut im_scaled = Image::from_size_val(
            ImageSize {
                width: w1,
                height: h0,
            },
            0.0,
        )?;
        resize_native(&src, &mut im_scaled, InterpolationMode::Bicubic)?;

        // 2) compress the vertical axis into the projection
        let h_iso = rounded_dim(h0 as f64 * scale_y);
        let mut im_iso = Image::from_size_val(
            ImageSize {
                width: w1,
                height: h_iso,
            },
            0.0,
        )?;
        resize_native(&im_scaled, &mut im_iso, InterpolationMode::Bicubic)?;

        // 3) the six directional variants
        let up = shear_y_up(&im_iso, k, CROP_PAD)?;
        let down = shear_y_down(&im_iso, k, CROP_PAD)?;
        let left = shear_x_left(&im_iso, k, CROP_PAD)?;
        let right = shear_x_right(&im_iso, k, CROP_PAD)?;
        let left_ccw = autocrop_alpha(&rotate_expand(&left, PROJECTION_ANGLE_DEG)?, CROP_PAD)?;
        let right_ccw = autocrop_alpha(&rotate_expand(&right, PROJECTION_ANGLE_DEG)?, CROP_PAD)?;

        for (direction, image) in DIRECTIONS
            .into_iter()
            .zip([up, down, left, right, left_ccw, right_ccw])
        {
            outputs.push(NamedOutput {
                name: direction.file_name(variant.label),
                image: image.cast_saturating::<u8>()?,
            });
        }
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use isogen_image::{Image, ImageError, ImageSize};

    #[test]
    fn width_variants_are_ordered() {
        let labels: Vec<&str> = super::WIDTH_VARIANTS.iter().map(|v| v.label).collect();
        assert_eq!(labels, ["very_narrow", "narrow", "medium", "wide"]);

        let factors: Vec<f64> = super::WIDTH_VARIANTS.iter().map(|v| v.factor).collect();
        assert_eq!(factors, [0.60, 0.80, 1.00, 1.25]);
    }

    #[test]
    fn direction_file_names() {
        assert_eq!(
            super::Direction::Up.file_name("medium"),
            "isometric_up_medium.png"
        );
        assert_eq!(
            super::Direction::LeftCcw.file_name("wide"),
            "isometric_left_ccw30_wide.png"
        );
    }

    #[test]
    fn process_rejects_zero_area() -> Result<(), ImageError> {
        let src = Image::<u8, 4>::new(
            ImageSize {
                width: 0,
                height: 10,
            },
            vec![],
        )?;

        let res = super::process(&src);
        assert!(matches!(res, Err(ImageError::ZeroSizeImage(0, 10))));

        Ok(())
    }
}
