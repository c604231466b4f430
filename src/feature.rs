// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! The feature descriptors a backend advertises to the plugin loader.
//!
//! A [Provider] is the nested form: one constructor registered for a family
//! and the ordered list of algorithms it provides. The loader consumes the
//! flat form, a sequence of [Feature] entries where each PROVIDE follows the
//! REGISTER it belongs to. The flat form is only ever derived from the
//! nested one, so a PROVIDE entry can't lose its constructor.

use std::fmt;
use std::iter;

use serde::{Serialize, Serializer};

use crate::algorithm::Algorithm;

/// Algorithm family a feature entry belongs to
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum Family {
    /// Key exchange
    Dh = 1,
    /// Authenticated encryption
    Aead = 2,
    /// Symmetric encryption
    Crypter = 3,
    /// Digests
    Hasher = 4,
    /// Pseudo random functions
    Prf = 5,
    /// Keyed MAC signers
    Signer = 6,
    /// Public key loading
    Pubkey = 7,
    /// Signature verification
    PubkeyVerify = 8,
    /// Public key encryption
    PubkeyEncrypt = 9,
    /// Private key loading
    Privkey = 10,
    /// Private key generation
    PrivkeyGen = 11,
    /// Signature creation
    PrivkeySign = 12,
    /// Private key decryption
    PrivkeyDecrypt = 13,
    /// Random number generation
    Rng = 14,
}

impl Family {
    /// The numeric code of this family
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Family::Dh => "DH",
            Family::Aead => "AEAD",
            Family::Crypter => "CRYPTER",
            Family::Hasher => "HASHER",
            Family::Prf => "PRF",
            Family::Signer => "SIGNER",
            Family::Pubkey => "PUBKEY",
            Family::PubkeyVerify => "PUBKEY_VERIFY",
            Family::PubkeyEncrypt => "PUBKEY_ENCRYPT",
            Family::Privkey => "PRIVKEY",
            Family::PrivkeyGen => "PRIVKEY_GEN",
            Family::PrivkeySign => "PRIVKEY_SIGN",
            Family::PrivkeyDecrypt => "PRIVKEY_DECRYPT",
            Family::Rng => "RNG",
        };
        f.write_str(name)
    }
}

/// Opaque reference to a backend factory.
///
/// It names the factory symbol the host resolves when it needs an
/// instance. The registry carries it around and never calls it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constructor {
    symbol: &'static str,
}

impl Constructor {
    /// References the factory exported under `symbol`
    pub const fn new(symbol: &'static str) -> Constructor {
        Constructor { symbol }
    }

    /// The factory symbol name
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Constructor({})", self.symbol)
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

impl Serialize for Constructor {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol)
    }
}

/// Whether an entry introduces a constructor or attaches an algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// A constructor is now provided for the family. `exclusive` marks it
    /// as the only intended provider, when the family knows the notion.
    Register {
        /// Exclusivity hint
        exclusive: Option<bool>,
    },
    /// The most recently registered constructor provides an algorithm
    Provide,
}

/// One flat feature table entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Feature {
    /// Entry kind
    pub kind: FeatureKind,
    /// Algorithm family
    pub family: Family,
    /// Provided algorithm, unset on REGISTER entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    /// Key size constraint in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<usize>,
    /// The registered constructor, or the one a PROVIDE entry binds to
    pub constructor: Constructor,
}

impl Feature {
    /// True for REGISTER entries
    pub fn is_register(&self) -> bool {
        matches!(self.kind, FeatureKind::Register { .. })
    }

    /// True for PROVIDE entries
    pub fn is_provide(&self) -> bool {
        self.kind == FeatureKind::Provide
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            FeatureKind::Register { exclusive } => {
                write!(f, "REGISTER {} {}", self.family, self.constructor)?;
                match exclusive {
                    Some(true) => write!(f, " (exclusive)"),
                    _ => Ok(()),
                }
            }
            FeatureKind::Provide => {
                write!(f, "    PROVIDE {}", self.family)?;
                if let Some(algorithm) = self.algorithm {
                    write!(f, " {}", algorithm)?;
                }
                if let Some(size) = self.key_size {
                    write!(f, " ({} bytes)", size)?;
                }
                Ok(())
            }
        }
    }
}

/// An algorithm provided by a registered constructor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Provided {
    /// Family the algorithm is offered under, which can differ from the
    /// family the constructor was registered for
    pub family: Family,
    /// The algorithm
    pub algorithm: Algorithm,
    /// Key size constraint in bytes
    pub key_size: Option<usize>,
}

/// A registered constructor and everything it provides, in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provider {
    /// Family the constructor is registered for
    pub family: Family,
    /// The constructor
    pub constructor: Constructor,
    /// Exclusivity hint for the consumer
    pub exclusive: Option<bool>,
    /// Provided algorithms
    pub provides: Vec<Provided>,
}

impl Provider {
    /// Number of flat entries this provider expands to, never zero
    pub fn entry_count(&self) -> usize {
        1 + self.provides.len()
    }

    /// The REGISTER entry
    pub fn register(&self) -> Feature {
        Feature {
            kind: FeatureKind::Register {
                exclusive: self.exclusive,
            },
            family: self.family,
            algorithm: None,
            key_size: None,
            constructor: self.constructor,
        }
    }

    /// The flat entries: REGISTER first, then one PROVIDE per algorithm
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        iter::once(self.register()).chain(self.provides.iter().map(|p| {
            Feature {
                kind: FeatureKind::Provide,
                family: p.family,
                algorithm: Some(p.algorithm),
                key_size: p.key_size,
                constructor: self.constructor,
            }
        }))
    }
}
