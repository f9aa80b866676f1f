//! The two protocol messages: [`Logits`] and [`Transcription`].
//!
//! Field numbers and wire types are a published contract with deployed
//! producers and consumers; changing them breaks wire compatibility.
//!
//! | Message | Field | Number | Wire type |
//! |---|---|---|---|
//! | `Logits` | `shape` | 1 | packed varint |
//! | `Logits` | `data` | 2 | packed 32-bit float |
//! | `Transcription` | `greedy_trans` | 1 | length-delimited string |
//! | `Transcription` | `beam_trans` | 2 | length-delimited string |
//! | `Transcription` | `beam_decoded_offsets` | 3 | packed varint |
//!
//! Both types also derive `serde` so downstream sinks can log or ship them
//! as JSON with the wire field names preserved.

use serde::{Deserialize, Serialize};

use crate::error::ProtoError;

// ─────────────────────────────────────────────────────────────────────────────
// Logits — model output scores
// ─────────────────────────────────────────────────────────────────────────────

/// Output scores of one model forward pass, flattened row-major.
///
/// Built by the inference process, consumed by a decoder, immutable once
/// constructed. The tensor invariant `data.len() == product(shape)` is
/// deliberately not enforced by the codec — a consumer about to reshape
/// `data` calls [`Logits::check_consistent`] first.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Logits {
    /// Tensor dimensions, e.g. `[batch, time, vocab]`.
    #[prost(int64, repeated, tag = "1")]
    pub shape: Vec<i64>,

    /// Flattened tensor values, row-major.
    #[prost(float, repeated, tag = "2")]
    pub data: Vec<f32>,
}

impl Logits {
    /// Element count implied by `shape` (product of its dimensions).
    ///
    /// Returns `None` when a dimension is negative or the product
    /// overflows. An empty shape describes a scalar and yields 1.
    pub fn element_count(&self) -> Option<u64> {
        self.shape.iter().try_fold(1u64, |acc, &dim| {
            let dim = u64::try_from(dim).ok()?;
            acc.checked_mul(dim)
        })
    }

    /// Check the tensor invariant `data.len() == product(shape)`.
    ///
    /// The wire codec never calls this: a message that decodes cleanly may
    /// still describe an impossible tensor, and it is the consumer that
    /// rejects it. Note that an all-empty message is a valid wire payload
    /// but not a consistent tensor — an empty shape denotes a scalar,
    /// which requires exactly one value.
    pub fn check_consistent(&self) -> Result<(), ProtoError> {
        let expected = self
            .element_count()
            .ok_or_else(|| ProtoError::InvalidShape {
                shape: self.shape.clone(),
            })?;
        let actual = self.data.len();
        if expected == actual as u64 {
            Ok(())
        } else {
            Err(ProtoError::ShapeMismatch {
                shape: self.shape.clone(),
                expected,
                actual,
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transcription — decoded text
// ─────────────────────────────────────────────────────────────────────────────

/// Decoded text for one [`Logits`] tensor.
///
/// All fields are optional on the wire, so a minimal valid message is
/// all-empty and decodes to empty strings and an empty offset list.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct Transcription {
    /// Highest-probability single-path decode.
    #[prost(string, tag = "1")]
    pub greedy_trans: String,

    /// Beam-search decode; may differ from `greedy_trans`.
    #[prost(string, tag = "2")]
    pub beam_trans: String,

    /// Per-token alignment offsets into the original input (audio frame
    /// indices), parallel in order to the tokens of `beam_trans`.
    #[prost(int64, repeated, tag = "3")]
    pub beam_decoded_offsets: Vec<i64>,
}

impl Transcription {
    /// Whether the offsets respect temporal order: every offset
    /// non-negative and the sequence non-decreasing.
    ///
    /// This is a convention of well-formed decoder output, not a wire
    /// constraint, so it is advisory only.
    pub fn offsets_are_monotonic(&self) -> bool {
        self.beam_decoded_offsets.iter().all(|&off| off >= 0)
            && self
                .beam_decoded_offsets
                .windows(2)
                .all(|pair| pair[0] <= pair[1])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
