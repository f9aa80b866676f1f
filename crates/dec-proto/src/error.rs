//! Crate error type.

/// Errors raised by the wire codec and the tensor-consistency helpers.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// Input bytes are truncated, contain an invalid varint, or present a
    /// wrong wire type for a known field number.
    #[error("malformed message: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A shape dimension is negative or the dimension product overflows.
    #[error("invalid tensor shape {shape:?}")]
    InvalidShape {
        /// The offending shape.
        shape: Vec<i64>,
    },

    /// The flattened payload length does not match the shape product.
    #[error("shape {shape:?} implies {expected} values, payload has {actual}")]
    ShapeMismatch {
        /// The declared shape.
        shape: Vec<i64>,
        /// Element count implied by the shape.
        expected: u64,
        /// Number of values actually present.
        actual: usize,
    },
}
