// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Static per-family sub-tables of the botan backend.
//!
//! Each sub-table is a fixed, ordered list of provider definitions. Every
//! provider and every provided algorithm carries the [Requirement] under
//! which it exists, and resolving a sub-table against an [Availability]
//! drops whatever isn't met. Nothing here can fail: a missing capability
//! simply contributes no entries.

use std::fmt;

use crate::algorithm::*;
use crate::availability::{Availability, Requirement};
use crate::feature::{Constructor, Family, Provided, Provider};

mod crypt;
mod dh;
mod ecdh;
mod ecdsa;
mod eddsa;
mod hash;
mod hmac;
mod keys;
mod prf;
mod rng;
mod rsa;

pub use crypt::CRYPT;
pub use dh::DH;
pub use ecdh::ECDH;
pub use ecdsa::ECDSA;
pub use eddsa::ED25519;
pub use hash::HASH;
pub use hmac::HMAC;
pub use keys::{PRIVKEY, PUBKEY};
pub use prf::PRF;
pub use rng::RNG;
pub use rsa::RSA;

/// Identifies a sub-table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubTableId {
    /// Finite field Diffie-Hellman groups
    Dh,
    /// Elliptic curve key exchange
    Ecdh,
    /// Symmetric ciphers and AEADs
    Crypt,
    /// Digests
    Hash,
    /// Pseudo random functions
    Prf,
    /// HMAC signers
    Hmac,
    /// Generic public key loader
    PubKey,
    /// Generic private key loader
    PrivKey,
    /// RSA keys and schemes
    Rsa,
    /// ECDSA keys and schemes
    Ecdsa,
    /// EdDSA keys and schemes
    Ed25519,
    /// Random number generators
    Rng,
}

impl fmt::Display for SubTableId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ProvideSpec {
    pub(crate) requires: Requirement,
    pub(crate) family: Family,
    pub(crate) algorithm: Algorithm,
    pub(crate) key_size: Option<usize>,
}

impl ProvideSpec {
    pub(crate) const fn new(family: Family, algorithm: Algorithm) -> Self {
        ProvideSpec {
            requires: Requirement::ALWAYS,
            family: family,
            algorithm: algorithm,
            key_size: None,
        }
    }

    pub(crate) const fn sized(mut self, key_size: usize) -> ProvideSpec {
        self.key_size = Some(key_size);
        self
    }

    pub(crate) const fn when(mut self, flags: Availability) -> ProvideSpec {
        self.requires = Requirement::All(flags);
        self
    }

    fn resolve(&self, available: Availability) -> Option<Provided> {
        if !self.requires.is_met(available) {
            return None;
        }
        Some(Provided {
            family: self.family,
            algorithm: self.algorithm,
            key_size: self.key_size,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ProviderSpec {
    pub(crate) requires: Requirement,
    pub(crate) family: Family,
    pub(crate) constructor: Constructor,
    pub(crate) exclusive: Option<bool>,
    pub(crate) provides: &'static [ProvideSpec],
}

impl ProviderSpec {
    fn max_len(&self) -> usize {
        1 + self.provides.len()
    }

    /* A registered constructor is kept even if none of its algorithms are */
    fn resolve(&self, available: Availability) -> Option<Provider> {
        if !self.requires.is_met(available) {
            return None;
        }
        Some(Provider {
            family: self.family,
            constructor: self.constructor,
            exclusive: self.exclusive,
            provides: self
                .provides
                .iter()
                .filter_map(|p| p.resolve(available))
                .collect(),
        })
    }
}

/// The fixed definition of one family's providers
#[derive(Debug)]
pub struct SubTable {
    pub(crate) id: SubTableId,
    pub(crate) providers: &'static [ProviderSpec],
}

impl SubTable {
    /// Which sub-table this is
    pub fn id(&self) -> SubTableId {
        self.id
    }

    /// Upper bound of entries this sub-table can contribute
    pub fn max_len(&self) -> usize {
        self.providers.iter().map(|p| p.max_len()).sum()
    }

    /// The providers available with the given capabilities, in order
    pub fn resolve(&self, available: Availability) -> Vec<Provider> {
        self.providers
            .iter()
            .filter_map(|p| p.resolve(available))
            .collect()
    }
}

/* Shorthands used by the sub-table definitions */

pub(crate) const fn dh(group: DhGroup) -> ProvideSpec {
    ProvideSpec::new(Family::Dh, Algorithm::DhGroup(group))
}

pub(crate) const fn crypter(alg: EncryptionAlgorithm) -> ProvideSpec {
    ProvideSpec::new(Family::Crypter, Algorithm::Encryption(alg))
}

pub(crate) const fn aead(alg: EncryptionAlgorithm) -> ProvideSpec {
    ProvideSpec::new(Family::Aead, Algorithm::Encryption(alg))
}

pub(crate) const fn hasher(alg: HashAlgorithm) -> ProvideSpec {
    ProvideSpec::new(Family::Hasher, Algorithm::Hash(alg))
}

pub(crate) const fn prf(alg: PseudoRandomFunction) -> ProvideSpec {
    ProvideSpec::new(Family::Prf, Algorithm::Prf(alg))
}

pub(crate) const fn signer(alg: IntegrityAlgorithm) -> ProvideSpec {
    ProvideSpec::new(Family::Signer, Algorithm::Integrity(alg))
}

pub(crate) const fn key(family: Family, key: KeyType) -> ProvideSpec {
    ProvideSpec::new(family, Algorithm::Key(key))
}

pub(crate) const fn sign(scheme: SignatureScheme) -> ProvideSpec {
    ProvideSpec::new(Family::PrivkeySign, Algorithm::Signature(scheme))
}

pub(crate) const fn verify(scheme: SignatureScheme) -> ProvideSpec {
    ProvideSpec::new(Family::PubkeyVerify, Algorithm::Signature(scheme))
}

pub(crate) const fn encrypt(scheme: EncryptionScheme) -> ProvideSpec {
    ProvideSpec::new(Family::PubkeyEncrypt, Algorithm::PkEncryption(scheme))
}

pub(crate) const fn decrypt(scheme: EncryptionScheme) -> ProvideSpec {
    ProvideSpec::new(Family::PrivkeyDecrypt, Algorithm::PkEncryption(scheme))
}

pub(crate) const fn rng(quality: RngQuality) -> ProvideSpec {
    ProvideSpec::new(Family::Rng, Algorithm::Rng(quality))
}

/// Ordered list of sub-tables a publisher assembles.
///
/// The RNG sub-table is kept apart because its inclusion is decided at
/// runtime.
#[derive(Clone, Debug)]
pub struct Layout {
    tables: Vec<&'static SubTable>,
    rng: Option<&'static SubTable>,
}

impl Layout {
    /// Builds a layout from always-included tables and an optional RNG table
    pub fn new(
        tables: Vec<&'static SubTable>,
        rng: Option<&'static SubTable>,
    ) -> Layout {
        Layout { tables, rng }
    }

    /// The backend layout: DH, ECDH, ciphers, hashers, PRFs, HMAC signers,
    /// generic private key loader, RSA, ECDSA, EdDSA, then RNG.
    ///
    /// The generic public key loader is only part of it with the
    /// `generic_pubkey` feature.
    pub fn standard() -> Layout {
        let mut tables: Vec<&'static SubTable> =
            vec![&DH, &ECDH, &CRYPT, &HASH, &PRF, &HMAC];
        if cfg!(feature = "generic_pubkey") {
            tables.push(&PUBKEY);
        }
        tables.extend([&PRIVKEY, &RSA, &ECDSA, &ED25519]);
        Layout::new(tables, Some(&RNG))
    }

    /// Same layout without the given sub-table
    pub fn without(mut self, id: SubTableId) -> Layout {
        self.tables.retain(|t| t.id != id);
        if self.rng.is_some_and(|t| t.id == id) {
            self.rng = None;
        }
        self
    }

    /// Always-included sub-tables, in order
    pub fn tables(&self) -> &[&'static SubTable] {
        &self.tables
    }

    /// The runtime-gated RNG sub-table
    pub fn rng(&self) -> Option<&'static SubTable> {
        self.rng
    }

    /// Upper bound of entries the layout can produce
    pub fn max_len(&self) -> usize {
        self.tables.iter().chain(self.rng.iter()).map(|t| t.max_len()).sum()
    }
}

impl Default for Layout {
    fn default() -> Layout {
        Layout::standard()
    }
}
