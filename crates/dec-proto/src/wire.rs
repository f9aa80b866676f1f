//! Byte-level encode/decode surface shared by every message.
//!
//! Serialization is a pure, synchronous function of its input: no shared
//! state, safe to call from any thread on independently allocated buffers.

use prost::Message;
use tracing::{debug, trace};

use crate::error::ProtoError;

/// Wire serialization for protocol messages.
///
/// Blanket-implemented for every prost message type so call sites never
/// touch `prost::Message` directly.
pub trait WireCodec: Sized {
    /// Encode into a freshly allocated buffer.
    ///
    /// Fields are emitted in field-number order; empty fields are omitted,
    /// so an all-default message encodes to zero bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a message from `bytes`.
    ///
    /// Fails with [`ProtoError::Decode`] when the input is truncated,
    /// contains an invalid varint, or carries a wrong wire type for a
    /// known field number. Unknown fields are skipped. On failure nothing
    /// of the partially read message is returned.
    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError>;
}

impl<T> WireCodec for T
where
    T: Message + Default,
{
    fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        match T::decode(bytes) {
            Ok(msg) => {
                trace!(len = bytes.len(), "decoded wire message");
                Ok(msg)
            }
            Err(err) => {
                debug!(len = bytes.len(), %err, "rejected wire message");
                Err(ProtoError::Decode(err))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
