//! Encryption for the saved webhook url.
//!
//! The key is derived from a passphrase with PBKDF2-HMAC-SHA256. Sealed
//! values are base64 of `nonce || ciphertext`.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::Sha256;

use crate::error::SecretError;

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT: &[u8] = b"hookcraft_webhook_salt_v1";
const NONCE_LEN: usize = 12;

#[derive(Clone)]
pub struct Secret {
    cipher: Aes256Gcm,
}

impl Secret {
    pub fn from_passphrase(passphrase: &str) -> Self {
        let mut key = [0u8; 32];
        pbkdf2::pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), SALT, PBKDF2_ITERATIONS, &mut key);
        Self {
            cipher: Aes256Gcm::new(&key.into()),
        }
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, SecretError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| SecretError::Encrypt)?;

        let mut sealed = nonce.to_vec();
        sealed.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(sealed))
    }

    pub fn decrypt(&self, sealed: &str) -> Result<String, SecretError> {
        let sealed = STANDARD.decode(sealed.trim())?;
        if sealed.len() <= NONCE_LEN {
            return Err(SecretError::Truncated);
        }

        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| SecretError::Decrypt)?;
        Ok(String::from_utf8(plaintext)?)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let secret = Secret::from_passphrase("hunter2");
        let sealed = secret.encrypt("https://example.com/hook").unwrap();
        assert_ne!(sealed, secret.encrypt("https://example.com/hook").unwrap());
        assert_eq!(secret.decrypt(&sealed).unwrap(), "https://example.com/hook");
    }

    #[test]
    fn wrong_key_or_garbage() {
        let sealed = Secret::from_passphrase("a").encrypt("hook").unwrap();
        let other = Secret::from_passphrase("b");

        assert!(matches!(other.decrypt(&sealed), Err(SecretError::Decrypt)));
        assert!(matches!(other.decrypt("%%%"), Err(SecretError::Encoding(..))));
        assert!(matches!(
            other.decrypt(&STANDARD.encode([0u8; 4])),
            Err(SecretError::Truncated)
        ));
    }
}
