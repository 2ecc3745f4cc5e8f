/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of an operation do not agree.
    #[error("Image size mismatch: expected {0}x{1}, got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when an operation receives an image with no pixels.
    #[error("Image must have a non-zero area, got {0}x{1}")]
    ZeroSizeImage(usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast image data")]
    CastError,

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} out of bounds for image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),
}
