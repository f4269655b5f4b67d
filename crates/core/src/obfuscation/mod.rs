//! Reversible identifier obfuscation for client-visible URLs.
//!
//! This is an encoding, not encryption: it hides an identifier's literal form
//! but provides no confidentiality or integrity. Anything that must stay secret
//! cannot go through here.

pub mod codec;
pub mod error;

#[cfg(test)]
mod codec_props;

pub use codec::{decode_id, encode_id, shareable_id};
pub use error::ObfuscationError;
