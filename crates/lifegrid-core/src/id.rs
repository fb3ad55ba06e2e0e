//! Opaque board identifiers.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::BoardError;

/// Length of every generated identifier, in characters.
pub const ID_LEN: usize = 15;

/// URL-safe identifier alphabet. Exactly 64 symbols, so masking a random
/// byte with `ALPHABET.len() - 1` picks a symbol without modulo bias.
pub const ALPHABET: &[u8; 64] =
    b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MASK: u8 = 0b0011_1111;

/// Identifies one persisted board instance.
///
/// Either a 15-character string over [`ALPHABET`], or the
/// [`BoardId::NONE`] sentinel (no text at all). Generated ids are drawn
/// from the operating system's secure random source; 90 bits of entropy
/// make collisions impractical. Two ids are equal iff their text is equal.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardId(Option<[u8; ID_LEN]>);

impl BoardId {
    /// The absent/uninitialized identifier. Never produced by [`BoardId::new`].
    pub const NONE: BoardId = BoardId(None);

    /// Generate a fresh identifier.
    pub fn new() -> Self {
        let mut bytes = [0u8; ID_LEN];
        OsRng.fill_bytes(&mut bytes);
        for b in &mut bytes {
            *b = ALPHABET[(*b & MASK) as usize];
        }
        Self(Some(bytes))
    }

    /// Parse `text`, returning `None` unless it is exactly [`ID_LEN`]
    /// characters from [`ALPHABET`]. Never panics.
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// `true` for the [`BoardId::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// The identifier text, or `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        // Bytes are drawn from ALPHABET, which is ASCII.
        self.0
            .as_ref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

impl FromStr for BoardId {
    type Err = BoardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let raw = text.as_bytes();
        if raw.len() != ID_LEN {
            return Err(BoardError::InvalidId {
                reason: format!("expected {ID_LEN} characters, got {}", text.chars().count()),
            });
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii() || !ALPHABET.contains(&(*c as u8))) {
            return Err(BoardError::InvalidId {
                reason: format!("character {bad:?} is outside the identifier alphabet"),
            });
        }
        let mut bytes = [0u8; ID_LEN];
        bytes.copy_from_slice(raw);
        Ok(Self(Some(bytes)))
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

impl fmt::Debug for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "BoardId({s})"),
            None => f.write_str("BoardId(NONE)"),
        }
    }
}
