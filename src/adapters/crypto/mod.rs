//! Cryptography adapters.
//!
//! - `HmacPasswordHasher` - peppered HMAC-SHA256 password hashes
//! - `JwtEncrypter` - HS256 access tokens
//! - `FakeHasher` / `FakeEncrypter` - deterministic doubles for tests and demos

mod fake;
mod hmac_hasher;
mod jwt;

pub use fake::{FakeEncrypter, FakeHasher};
pub use hmac_hasher::HmacPasswordHasher;
pub use jwt::{AccessTokenClaims, JwtEncrypter};

/// Lowercase hex encoding.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encode_bytes() {
        assert_eq!(hex_encode(&[0x00, 0xff, 0x10]), "00ff10");
        assert_eq!(hex_encode(&[]), "");
    }
}
