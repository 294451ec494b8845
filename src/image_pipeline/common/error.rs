use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Mismatched buffers: {0}")]
    DimensionMismatch(String),

    #[error("Invalid channel configuration: expected {expected}, got {actual}")]
    InvalidChannelConfiguration { expected: String, actual: usize },

    #[error("Invalid quantization levels: {0} (must be in [1, 255])")]
    InvalidLevels(u32),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to allocate {0} bytes for image buffer")]
    AllocationFailure(usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Malformed Netpbm header: {0}")]
    MalformedHeader(String),

    #[error("Unsupported magic number: {0}")]
    UnsupportedMagic(String),

    #[error("Premature end of pixel data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error("Too many blobs in one labeling pass: {0} (maximum 254)")]
    LabelOverflow(usize),

    #[error("Not enough color bands to decode a resistance: found {0}, need 3")]
    DecodeUnderflow(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VisionError>;
