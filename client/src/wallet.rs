//! Wallet key handling and EIP-191 personal message signing

use std::fmt;

use anyhow::{Context, Result};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

/// An Ethereum account backed by a secp256k1 private key
pub struct Wallet {
    key: SigningKey,
    address: String,
}

impl Wallet {
    /// Load a wallet from a hex private key, with or without `0x`
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let trimmed = private_key.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let bytes = hex::decode(digits).context("Private key is not valid hex")?;
        let key = SigningKey::from_slice(&bytes).context("Invalid secp256k1 private key")?;
        let address = address_of(&key);

        Ok(Self { key, address })
    }

    /// EIP-55 checksummed address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sign `message` the way `personal_sign` does.
    ///
    /// Returns the 65-byte `r || s || v` signature as `0x` hex, with
    /// `v` in the legacy 27/28 form.
    pub fn sign_message(&self, message: &str) -> Result<String> {
        let digest = personal_message_hash(message.as_bytes());
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest)
            .context("Failed to sign message")?;

        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte() + 27);

        Ok(format!("0x{}", hex::encode(bytes)))
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Keccak-256 of the message behind the `\x19Ethereum Signed Message` prefix
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(format!("\x19Ethereum Signed Message:\n{}", message.len()).as_bytes());
    hasher.update(message);

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

fn address_of(key: &SigningKey) -> String {
    let public = k256::PublicKey::from(key.verifying_key());
    let uncompressed = public.to_encoded_point(false);
    let digest = Keccak256::digest(&uncompressed.as_bytes()[1..]);
    to_checksum_address(&digest[12..])
}

/// Mixed-case hex encoding of a 20-byte address (EIP-55)
fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
