use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Opaque session token generator.
///
/// Tokens are random bytes from the operating system RNG, encoded as
/// URL-safe base64 without padding. They carry no structure.
#[derive(Debug, Clone, Copy)]
pub struct SessionTokenGenerator {
    byte_length: usize,
}

impl SessionTokenGenerator {
    /// Entropy used by [`SessionTokenGenerator::new`] (256 bits).
    pub const DEFAULT_BYTE_LENGTH: usize = 32;

    /// Smallest accepted entropy (128 bits).
    pub const MIN_BYTE_LENGTH: usize = 16;

    /// Create a generator producing 32-byte tokens.
    pub fn new() -> Self {
        Self {
            byte_length: Self::DEFAULT_BYTE_LENGTH,
        }
    }

    /// Create a generator with a custom entropy size.
    ///
    /// # Arguments
    /// * `byte_length` - Random bytes per token, raised to `MIN_BYTE_LENGTH` if smaller
    pub fn with_byte_length(byte_length: usize) -> Self {
        Self {
            byte_length: byte_length.max(Self::MIN_BYTE_LENGTH),
        }
    }

    /// Number of random bytes behind each token.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Generate a fresh token.
    ///
    /// # Returns
    /// Base64 URL-safe encoded string without padding
    pub fn generate(&self) -> String {
        let mut buffer = vec![0u8; self.byte_length];
        OsRng.fill_bytes(&mut buffer);
        URL_SAFE_NO_PAD.encode(buffer)
    }
}

impl Default for SessionTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
