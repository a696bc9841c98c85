//! Ed25519 request signing matching Discord's interaction webhooks.
//!
//! Discord signs `timestamp || body` with the application's private key and sends
//! the hex signature in `X-Signature-Ed25519` alongside `X-Signature-Timestamp`.
//! `TestSigner` holds a freshly generated key pair so tests can produce requests
//! the server accepts, and tamper with them to produce requests it rejects.

use ring::{
    rand::SystemRandom,
    signature::{Ed25519KeyPair, KeyPair},
};

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

pub struct TestSigner {
    key_pair: Ed25519KeyPair,
}

impl TestSigner {
    /// Generates a new random key pair.
    ///
    /// # Panics
    /// - If the system random source is unavailable
    pub fn generate() -> Self {
        let rng = SystemRandom::new();
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&rng).expect("generate ed25519 key");
        let key_pair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref()).expect("parse ed25519 key");

        Self { key_pair }
    }

    /// Raw 32-byte public key.
    pub fn public_key(&self) -> [u8; 32] {
        let mut key = [0u8; 32];
        key.copy_from_slice(self.key_pair.public_key().as_ref());
        key
    }

    /// Public key as Discord shows it in the developer portal.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    /// Hex signature over `timestamp || body`.
    pub fn sign(&self, timestamp: &str, body: &str) -> String {
        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body.as_bytes());

        hex::encode(self.key_pair.sign(&message).as_ref())
    }

    /// Signs `body` with a fixed timestamp, returning `(signature, timestamp)`.
    pub fn sign_body(&self, body: &str) -> (String, String) {
        let timestamp = "1700000000".to_string();
        (self.sign(&timestamp, body), timestamp)
    }
}
