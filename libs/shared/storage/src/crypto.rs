//! AES-256-GCM envelope for documents encrypted at rest. The key is derived
//! from the configured passphrase with PBKDF2-HMAC-SHA256; salt and iv are
//! fresh per write, so re-saving a document always produces new ciphertext.

use aes_gcm::aead::{rand_core::RngCore, Aead, OsRng};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

const ENVELOPE_VERSION: u8 = 1;
const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Serialized form of an encrypted document: all fields base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoEnvelope {
    pub v: u8,
    pub salt: String,
    pub iv: String,
    pub tag: String,
    pub data: String,
}

fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

pub fn encrypt_text(text: &str, passphrase: &str) -> Option<CryptoEnvelope> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let sealed = cipher.encrypt(Nonce::from_slice(&iv), text.as_bytes()).ok()?;

    if sealed.len() < TAG_LEN {
        return None;
    }
    let (data, tag) = sealed.split_at(sealed.len() - TAG_LEN);

    Some(CryptoEnvelope {
        v: ENVELOPE_VERSION,
        salt: B64.encode(salt),
        iv: B64.encode(iv),
        tag: B64.encode(tag),
        data: B64.encode(data),
    })
}

/// Returns `None` on any malformed field or authentication failure; callers
/// treat that as "not ciphertext" and fall back to plaintext parsing.
pub fn decrypt_envelope(envelope: &CryptoEnvelope, passphrase: &str) -> Option<String> {
    let salt = B64.decode(&envelope.salt).ok()?;
    let iv = B64.decode(&envelope.iv).ok()?;
    let tag = B64.decode(&envelope.tag).ok()?;
    let data = B64.decode(&envelope.data).ok()?;
    if iv.len() != IV_LEN || tag.is_empty() || data.is_empty() {
        return None;
    }

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    let mut sealed = Vec::with_capacity(data.len() + tag.len());
    sealed.extend_from_slice(&data);
    sealed.extend_from_slice(&tag);

    let plain = cipher.decrypt(Nonce::from_slice(&iv), sealed.as_slice()).ok()?;
    String::from_utf8(plain).ok()
}
