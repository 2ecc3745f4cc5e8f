//! Geometric image transformations using affine warps.
//!
//! This module provides functions for applying 2D transformations to images:
//!
//! - Affine transformations (rotation, translation, scaling, shearing)
//! - Rotation matrix generation
//! - Affine transform inversion
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```no_run
//! use isogen_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((128.0, 128.0), 45.0, 1.0);
//! // Use with warp_affine to rotate the image
//! ```

mod affine;

pub use affine::{get_rotation_matrix2d, invert_affine_transform, warp_affine};
