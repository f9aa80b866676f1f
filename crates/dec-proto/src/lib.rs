//! # dec-proto
//!
//! Wire message types for the logits decoding service.
//!
//! ```text
//! acoustic model forward pass
//!   → Logits { shape, data }                      (this crate)
//!   → decoder (greedy + beam search)
//!   → Transcription { greedy_trans, beam_trans,
//!                     beam_decoded_offsets }      (this crate)
//!   → client
//! ```
//!
//! The crate owns the wire contract only: field numbers, wire types, and
//! the encode/decode surface. Producing `Logits` (model inference) and
//! turning them into `Transcription`s (CTC decoding) happen elsewhere;
//! both sides depend on this crate for the message shapes.
//!
//! - **Messages**: [`messages::Logits`], [`messages::Transcription`]
//! - **Codec**: [`wire::WireCodec`] — `to_bytes` / `from_bytes`
//! - **Errors**: [`error::ProtoError`] via `thiserror`
//!
//! ## Crate Position
//!
//! Foundation crate. Standalone (no internal dependencies).
//! Depended on by: decoder services and their clients.

#![deny(unsafe_code)]

pub mod error;
pub mod messages;
pub mod wire;

pub use error::ProtoError;
pub use messages::{Logits, Transcription};
pub use wire::WireCodec;
