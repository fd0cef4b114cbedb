//! Share-link token codec.
//!
//! # Responsibility
//! - Encode a note plus its unlock parameters into a URL-safe token.
//! - Decode a token back into a session-scoped `SharedNote`.
//! - Extract tokens from URL fragments (`#share=<token>`).
//!
//! # Invariants
//! - `decode(encode(..))` reproduces every payload field exactly.
//! - Missing `radius`/`tolerance` default to 10 m / 35°; missing `createdAt`
//!   defaults to the decode-time clock.
//! - Decode failures are recoverable: callers degrade to "no shared note".
//!
//! # See also
//! - docs/architecture/share-format.md

mod codec;

pub use codec::{
    decode, encode, share_fragment, shared_note_from_fragment, token_from_fragment,
    ShareDecodeError,
};
