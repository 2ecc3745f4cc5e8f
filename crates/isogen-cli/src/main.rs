use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use isogen_image::{Image, ImageSize};
use isogen_imgproc::isometric;

/// File types the decoder is expected to handle.
const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

#[derive(Parser)]
#[command(about = "Derive the 24 isometric variants of an image")]
struct Args {
    /// Path to the input image (png, jpg, jpeg, gif, bmp or tiff).
    #[arg(short, long)]
    input: PathBuf,

    /// Directory where the timestamped output folder is created.
    #[arg(short, long, default_value = "outputs")]
    output_dir: PathBuf,
}

fn allowed_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    if !allowed_file(&args.input) {
        return Err(format!("unsupported file type: {}", args.input.display()).into());
    }

    // decode and normalize to RGBA
    let decoded = image::open(&args.input)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    let src = Image::<u8, 4>::new(
        ImageSize {
            width: width as usize,
            height: height as usize,
        },
        decoded.into_raw(),
    )?;
    log::info!("loaded {} ({}x{})", args.input.display(), width, height);

    let outputs = isometric::process(&src)?;

    // one timestamped folder per invocation
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let out_dir = args.output_dir.join(timestamp.to_string());
    std::fs::create_dir_all(&out_dir)?;

    for output in &outputs {
        let path = out_dir.join(&output.name);
        let buffer = image::RgbaImage::from_raw(
            output.image.width() as u32,
            output.image.height() as u32,
            output.image.as_slice().to_vec(),
        )
        .ok_or("pixel buffer does not match its dimensions")?;
        buffer.save(&path)?;
        log::info!("saved {}", path.display());
    }

    log::info!("wrote {} variants to {}", outputs.len(), out_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn allowed_file_checks_extension() {
        assert!(super::allowed_file(Path::new("sprite.png")));
        assert!(super::allowed_file(Path::new("SPRITE.JPG")));
        assert!(super::allowed_file(Path::new("dir/tile.jpeg")));
        assert!(!super::allowed_file(Path::new("notes.txt")));
        assert!(!super::allowed_file(Path::new("no_extension")));
    }
}
