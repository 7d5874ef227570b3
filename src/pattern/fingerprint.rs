//! XOR folding of a request payload into an 8x8 bit pattern.

/// Number of bytes (and therefore rows) in a fingerprint.
pub const FINGERPRINT_LEN: usize = 8;

/// Payload bytes that never contribute to a fingerprint.
const SKIPPED: u8 = b'"';

/// Fixed 8-byte digest of a payload. Byte `i` becomes row `i` of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    pub fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Fold `payload` into 8 accumulator bytes, cycling through them in order.
    ///
    /// Double quotes are skipped entirely: they neither change a byte nor
    /// advance the fold position.
    pub fn fold(payload: &[u8]) -> Self {
        let mut data = [0u8; FINGERPRINT_LEN];
        let mut idx = 0;

        for &b in payload.iter().filter(|&&b| b != SKIPPED) {
            data[idx] ^= b;
            idx = (idx + 1) % FINGERPRINT_LEN;
        }

        Self(data)
    }

    #[inline]
    pub fn bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Cell state at `row`, `col`, column 0 being the most significant bit.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.0[row] & (0x80 >> col) != 0
    }

    /// Number of live cells in the pattern.
    pub fn population(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }
}

impl From<&str> for Fingerprint {
    fn from(payload: &str) -> Self {
        Self::fold(payload.as_bytes())
    }
}
