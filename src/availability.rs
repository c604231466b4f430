// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Build-time capabilities of the underlying crypto library.
//!
//! The compiled set is selected with cargo features, but the registry only
//! ever consumes an [Availability] value, so any subset can be assembled
//! explicitly.

use bitflags::bitflags;

bitflags! {
    /// Set of algorithms and modes the underlying library was built with
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Availability: u32 {
        /// Finite field Diffie-Hellman
        const DIFFIE_HELLMAN = 1 << 0;
        /// Elliptic curve Diffie-Hellman
        const ECDH = 1 << 1;
        /// X25519 key exchange
        const X25519 = 1 << 2;
        /// AES block cipher
        const AES = 1 << 3;
        /// CBC mode
        const MODE_CBC = 1 << 4;
        /// GCM authenticated mode
        const AEAD_GCM = 1 << 5;
        /// CCM authenticated mode
        const AEAD_CCM = 1 << 6;
        /// ChaCha20-Poly1305 AEAD
        const AEAD_CHACHA20_POLY1305 = 1 << 7;
        /// MD5
        const MD5 = 1 << 8;
        /// SHA-1
        const SHA1 = 1 << 9;
        /// SHA-224 and SHA-256
        const SHA2_32 = 1 << 10;
        /// SHA-384 and SHA-512
        const SHA2_64 = 1 << 11;
        /// SHA-3 family
        const SHA3 = 1 << 12;
        /// HMAC construction
        const HMAC = 1 << 13;
        /// RSA keys
        const RSA = 1 << 14;
        /// ECDSA keys
        const ECDSA = 1 << 15;
        /// Ed25519 keys
        const ED25519 = 1 << 16;
        /// PKCS#1 v1.5 signature padding
        const EMSA_PKCS1 = 1 << 17;
        /// PSS signature padding
        const EMSA_PSSR = 1 << 18;
        /// OAEP encryption padding
        const EME_OAEP = 1 << 19;
        /// Raw (prehashed) signature encoding
        const EMSA_RAW = 1 << 20;
        /// EMSA1 signature encoding
        const EMSA1 = 1 << 21;
        /// Operating system RNG
        const SYSTEM_RNG = 1 << 22;
        /// HMAC DRBG
        const HMAC_DRBG = 1 << 23;
    }
}

/* Maps the cargo features to the flags they enable */
const COMPILED: &[(bool, Availability)] = &[
    (cfg!(feature = "dh"), Availability::DIFFIE_HELLMAN),
    (cfg!(feature = "ecdh"), Availability::ECDH),
    (cfg!(feature = "x25519"), Availability::X25519),
    (cfg!(feature = "aes"), Availability::AES),
    (cfg!(feature = "cbc"), Availability::MODE_CBC),
    (cfg!(feature = "gcm"), Availability::AEAD_GCM),
    (cfg!(feature = "ccm"), Availability::AEAD_CCM),
    (
        cfg!(feature = "chacha20poly1305"),
        Availability::AEAD_CHACHA20_POLY1305,
    ),
    (cfg!(feature = "md5"), Availability::MD5),
    (cfg!(feature = "sha1"), Availability::SHA1),
    (cfg!(feature = "sha2_32"), Availability::SHA2_32),
    (cfg!(feature = "sha2_64"), Availability::SHA2_64),
    (cfg!(feature = "sha3"), Availability::SHA3),
    (cfg!(feature = "hmac"), Availability::HMAC),
    (cfg!(feature = "rsa"), Availability::RSA),
    (cfg!(feature = "ecdsa"), Availability::ECDSA),
    (cfg!(feature = "ed25519"), Availability::ED25519),
    (cfg!(feature = "emsa_pkcs1"), Availability::EMSA_PKCS1),
    (cfg!(feature = "emsa_pssr"), Availability::EMSA_PSSR),
    (cfg!(feature = "eme_oaep"), Availability::EME_OAEP),
    (cfg!(feature = "emsa_raw"), Availability::EMSA_RAW),
    (cfg!(feature = "emsa1"), Availability::EMSA1),
    (cfg!(feature = "system_rng"), Availability::SYSTEM_RNG),
    (cfg!(feature = "hmac_drbg"), Availability::HMAC_DRBG),
];

impl Availability {
    /// The capabilities selected at build time through cargo features
    pub fn compiled() -> Availability {
        COMPILED
            .iter()
            .filter(|(enabled, _)| *enabled)
            .fold(Availability::empty(), |acc, (_, flag)| acc | *flag)
    }
}

/// Condition under which a sub-table entry is included
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Every flag in the set must be available
    All(Availability),
    /// At least one of the sets must be fully available
    Any(&'static [Availability]),
}

impl Requirement {
    /// A requirement that always holds
    pub const ALWAYS: Requirement = Requirement::All(Availability::empty());

    /// Checks the requirement against a set of available capabilities
    pub fn is_met(&self, available: Availability) -> bool {
        match self {
            Requirement::All(flags) => available.contains(*flags),
            Requirement::Any(alternatives) => {
                alternatives.iter().any(|flags| available.contains(*flags))
            }
        }
    }
}
