// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Identifiers of the concrete algorithms a backend can provide.
//!
//! Every identifier carries a stable numeric code. Where the IKEv2 IANA
//! registries define a number it is used as is, everything else lives in
//! the private use range starting at 1024.

use std::fmt;

use serde::{Serialize, Serializer};

/// Helper macro to define an identifier enumeration along with its codes
/// and printable names
macro_rules! algorithm_ids {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $variant = $code,
            )+
        }

        impl $name {
            /// All identifiers, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The numeric code of this identifier
            pub fn code(self) -> u32 {
                self as u32
            }

            /// The printable name of this identifier
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    };
}

algorithm_ids! {
    /// Diffie-Hellman groups
    DhGroup {
        Modp768 = 1 => "MODP_768",
        Modp1024 = 2 => "MODP_1024",
        Modp1536 = 5 => "MODP_1536",
        Modp2048 = 14 => "MODP_2048",
        Modp3072 = 15 => "MODP_3072",
        Modp4096 = 16 => "MODP_4096",
        Modp6144 = 17 => "MODP_6144",
        Modp8192 = 18 => "MODP_8192",
        Ecp256 = 19 => "ECP_256",
        Ecp384 = 20 => "ECP_384",
        Ecp521 = 21 => "ECP_521",
        Modp1024S160 = 22 => "MODP_1024_160",
        Modp2048S224 = 23 => "MODP_2048_224",
        Modp2048S256 = 24 => "MODP_2048_256",
        Ecp256Bp = 28 => "ECP_256_BP",
        Ecp384Bp = 29 => "ECP_384_BP",
        Ecp512Bp = 30 => "ECP_512_BP",
        Curve25519 = 31 => "CURVE_25519",
        ModpCustom = 1025 => "MODP_CUSTOM",
    }
}

algorithm_ids! {
    /// Symmetric encryption algorithms, plain and authenticated
    EncryptionAlgorithm {
        AesCbc = 12 => "AES_CBC",
        AesCcmIcv8 = 14 => "AES_CCM_ICV8",
        AesCcmIcv12 = 15 => "AES_CCM_ICV12",
        AesCcmIcv16 = 16 => "AES_CCM_ICV16",
        AesGcmIcv8 = 18 => "AES_GCM_ICV8",
        AesGcmIcv12 = 19 => "AES_GCM_ICV12",
        AesGcmIcv16 = 20 => "AES_GCM_ICV16",
        Chacha20Poly1305 = 28 => "CHACHA20_POLY1305",
    }
}

algorithm_ids! {
    /// Digest algorithms
    HashAlgorithm {
        Sha1 = 1 => "SHA1",
        Sha256 = 2 => "SHA256",
        Sha384 = 3 => "SHA384",
        Sha512 = 4 => "SHA512",
        Identity = 5 => "IDENTITY",
        Md5 = 1027 => "MD5",
        Sha224 = 1028 => "SHA224",
        Sha3_224 = 1029 => "SHA3_224",
        Sha3_256 = 1030 => "SHA3_256",
        Sha3_384 = 1031 => "SHA3_384",
        Sha3_512 = 1032 => "SHA3_512",
    }
}

algorithm_ids! {
    /// Pseudo random functions
    PseudoRandomFunction {
        HmacSha1 = 2 => "PRF_HMAC_SHA1",
        HmacSha2_256 = 5 => "PRF_HMAC_SHA2_256",
        HmacSha2_384 = 6 => "PRF_HMAC_SHA2_384",
        HmacSha2_512 = 7 => "PRF_HMAC_SHA2_512",
    }
}

algorithm_ids! {
    /// Integrity (keyed MAC) algorithms with their truncation length
    IntegrityAlgorithm {
        HmacSha1_96 = 2 => "HMAC_SHA1_96",
        HmacSha2_256_128 = 12 => "HMAC_SHA2_256_128",
        HmacSha2_384_192 = 13 => "HMAC_SHA2_384_192",
        HmacSha2_512_256 = 14 => "HMAC_SHA2_512_256",
        HmacSha1_128 = 1025 => "HMAC_SHA1_128",
        HmacSha1_160 = 1026 => "HMAC_SHA1_160",
        HmacSha2_256_256 = 1027 => "HMAC_SHA2_256_256",
        HmacSha2_384_384 = 1028 => "HMAC_SHA2_384_384",
        HmacSha2_512_512 = 1029 => "HMAC_SHA2_512_512",
    }
}

algorithm_ids! {
    /// Asymmetric key types
    KeyType {
        Any = 0 => "ANY",
        Rsa = 1 => "RSA",
        Ecdsa = 2 => "ECDSA",
        Ed25519 = 4 => "ED25519",
    }
}

algorithm_ids! {
    /// Signature schemes
    SignatureScheme {
        RsaEmsaPkcs1Null = 1 => "RSA_EMSA_PKCS1_NULL",
        RsaEmsaPkcs1Sha1 = 2 => "RSA_EMSA_PKCS1_SHA1",
        RsaEmsaPkcs1Sha2_224 = 3 => "RSA_EMSA_PKCS1_SHA2_224",
        RsaEmsaPkcs1Sha2_256 = 4 => "RSA_EMSA_PKCS1_SHA2_256",
        RsaEmsaPkcs1Sha2_384 = 5 => "RSA_EMSA_PKCS1_SHA2_384",
        RsaEmsaPkcs1Sha2_512 = 6 => "RSA_EMSA_PKCS1_SHA2_512",
        RsaEmsaPkcs1Sha3_224 = 7 => "RSA_EMSA_PKCS1_SHA3_224",
        RsaEmsaPkcs1Sha3_256 = 8 => "RSA_EMSA_PKCS1_SHA3_256",
        RsaEmsaPkcs1Sha3_384 = 9 => "RSA_EMSA_PKCS1_SHA3_384",
        RsaEmsaPkcs1Sha3_512 = 10 => "RSA_EMSA_PKCS1_SHA3_512",
        RsaEmsaPss = 11 => "RSA_EMSA_PSS",
        EcdsaWithNull = 12 => "ECDSA_WITH_NULL",
        EcdsaWithSha1Der = 13 => "ECDSA_WITH_SHA1_DER",
        EcdsaWithSha256Der = 14 => "ECDSA_WITH_SHA256_DER",
        EcdsaWithSha384Der = 15 => "ECDSA_WITH_SHA384_DER",
        EcdsaWithSha512Der = 16 => "ECDSA_WITH_SHA512_DER",
        Ecdsa256 = 17 => "ECDSA_256",
        Ecdsa384 = 18 => "ECDSA_384",
        Ecdsa521 = 19 => "ECDSA_521",
        Ed25519 = 20 => "ED25519",
    }
}

algorithm_ids! {
    /// Public key encryption schemes
    EncryptionScheme {
        RsaPkcs1 = 1 => "RSA_PKCS1",
        RsaOaepSha224 = 2 => "RSA_OAEP_SHA224",
        RsaOaepSha256 = 3 => "RSA_OAEP_SHA256",
        RsaOaepSha384 = 4 => "RSA_OAEP_SHA384",
        RsaOaepSha512 = 5 => "RSA_OAEP_SHA512",
    }
}

algorithm_ids! {
    /// Random number generator qualities
    RngQuality {
        Weak = 0 => "WEAK",
        Strong = 1 => "STRONG",
        True = 2 => "TRUE",
    }
}

/// A concrete algorithm identifier, grouped by the kind of primitive it
/// names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Key exchange group
    DhGroup(DhGroup),
    /// Symmetric cipher or AEAD
    Encryption(EncryptionAlgorithm),
    /// Digest
    Hash(HashAlgorithm),
    /// Pseudo random function
    Prf(PseudoRandomFunction),
    /// Keyed MAC
    Integrity(IntegrityAlgorithm),
    /// Asymmetric key type
    Key(KeyType),
    /// Signature scheme
    Signature(SignatureScheme),
    /// Public key encryption scheme
    PkEncryption(EncryptionScheme),
    /// Random number generator quality
    Rng(RngQuality),
}

impl Algorithm {
    /// The numeric code of the wrapped identifier
    pub fn code(&self) -> u32 {
        match self {
            Algorithm::DhGroup(a) => a.code(),
            Algorithm::Encryption(a) => a.code(),
            Algorithm::Hash(a) => a.code(),
            Algorithm::Prf(a) => a.code(),
            Algorithm::Integrity(a) => a.code(),
            Algorithm::Key(a) => a.code(),
            Algorithm::Signature(a) => a.code(),
            Algorithm::PkEncryption(a) => a.code(),
            Algorithm::Rng(a) => a.code(),
        }
    }

    /// The printable name of the wrapped identifier
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::DhGroup(a) => a.name(),
            Algorithm::Encryption(a) => a.name(),
            Algorithm::Hash(a) => a.name(),
            Algorithm::Prf(a) => a.name(),
            Algorithm::Integrity(a) => a.name(),
            Algorithm::Key(a) => a.name(),
            Algorithm::Signature(a) => a.name(),
            Algorithm::PkEncryption(a) => a.name(),
            Algorithm::Rng(a) => a.name(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
