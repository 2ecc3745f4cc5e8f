use isogen_image::{Image, ImageError, ImageSize};
use isogen_imgproc::isometric::{process, DIRECTIONS, WIDTH_VARIANTS};

fn opaque_white(width: usize, height: usize) -> Result<Image<u8, 4>, ImageError> {
    Image::from_size_val(ImageSize { width, height }, 255u8)
}

#[test]
fn process_returns_24_named_outputs_in_order() -> Result<(), ImageError> {
    let src = opaque_white(64, 48)?;
    let outputs = process(&src)?;

    assert_eq!(outputs.len(), 24);

    let expected_names: Vec<String> = WIDTH_VARIANTS
        .iter()
        .flat_map(|v| DIRECTIONS.iter().map(|d| d.file_name(v.label)))
        .collect();
    let names: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, expected_names);

    // spot check the naming convention
    assert_eq!(names[0], "isometric_up_very_narrow.png");
    assert_eq!(names[4], "isometric_left_ccw30_very_narrow.png");
    assert_eq!(names[23], "isometric_right_ccw30_wide.png");

    Ok(())
}

#[test]
fn process_outputs_are_non_degenerate() -> Result<(), ImageError> {
    let src = opaque_white(40, 30)?;
    let outputs = process(&src)?;

    for output in &outputs {
        assert!(output.image.width() >= 1, "{} collapsed", output.name);
        assert!(output.image.height() >= 1, "{} collapsed", output.name);

        let opaque = output
            .image
            .as_slice()
            .chunks_exact(4)
            .filter(|p| p[3] > 0)
            .count();
        assert!(opaque > 0, "{} has no opaque pixels", output.name);
    }

    Ok(())
}

#[test]
fn process_white_square_medium_scenario() -> Result<(), ImageError> {
    // 100x100 fully opaque white input, medium width level (factor 1.00):
    // the width stays 100, the height compresses to round(100*cos30) = 87 and
    // shear up targets round(87 + tan30*100) = 145 rows; the fully opaque
    // input fills that canvas, so the crop cannot tighten it further
    let src = opaque_white(100, 100)?;
    let outputs = process(&src)?;

    let up_medium = outputs
        .iter()
        .find(|o| o.name == "isometric_up_medium.png")
        .expect("missing medium up variant");

    assert_eq!(up_medium.image.width(), 100);
    assert_eq!(up_medium.image.height(), 145);

    // the interior of the sheared square stays fully opaque
    let cx = up_medium.image.width() / 2;
    let cy = up_medium.image.height() / 2;
    assert_eq!(up_medium.image.get([cy, cx, 3]), Some(&255u8));

    Ok(())
}

#[test]
fn process_width_levels_scale_the_canvas() -> Result<(), ImageError> {
    // for a fully opaque input the up shear keeps the scaled width, so the
    // output width observes max(1, round_ties_even(w0 * factor)) directly
    let src = opaque_white(101, 40)?;
    let outputs = process(&src)?;

    for (variant, expected_w1) in WIDTH_VARIANTS.iter().zip([61usize, 81, 101, 126]) {
        let name = format!("isometric_up_{}.png", variant.label);
        let up = outputs
            .iter()
            .find(|o| o.name == name)
            .expect("missing up variant");
        assert_eq!(up.image.width(), expected_w1, "width level {}", variant.label);
    }

    Ok(())
}

#[test]
fn process_tiny_input_still_yields_24() -> Result<(), ImageError> {
    let src = opaque_white(1, 1)?;
    let outputs = process(&src)?;

    assert_eq!(outputs.len(), 24);
    for output in &outputs {
        assert!(output.image.width() >= 1);
        assert!(output.image.height() >= 1);
    }

    Ok(())
}

#[test]
fn process_preserves_transparent_border_content() -> Result<(), ImageError> {
    // an opaque block floating on a transparent canvas: every variant crops
    // to the block's footprint, so no output can exceed the padded canvas of
    // its pre-crop stage, and all stay non-empty
    let mut src = Image::<u8, 4>::from_size_val(
        ImageSize {
            width: 64,
            height: 64,
        },
        0u8,
    )?;
    for y in 16..48 {
        for x in 16..48 {
            let base = (y * 64 + x) * 4;
            src.as_slice_mut()[base..base + 4].copy_from_slice(&[200, 200, 200, 255]);
        }
    }

    let outputs = process(&src)?;
    assert_eq!(outputs.len(), 24);

    for output in &outputs {
        let opaque = output
            .image
            .as_slice()
            .chunks_exact(4)
            .filter(|p| p[3] > 0)
            .count();
        assert!(opaque > 0, "{} lost its content", output.name);
    }

    Ok(())
}
