// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use EncryptionScheme::*;
use SignatureScheme::*;

const RSA_PUBLIC_KEY_LOAD: Constructor =
    Constructor::new("botan_rsa_public_key_load");
const RSA_PRIVATE_KEY_LOAD: Constructor =
    Constructor::new("botan_rsa_private_key_load");
const RSA_PRIVATE_KEY_GEN: Constructor =
    Constructor::new("botan_rsa_private_key_gen");

const PKCS1: Availability = Availability::EMSA_PKCS1;
const PKCS1_SHA1: Availability = PKCS1.union(Availability::SHA1);
const PKCS1_SHA2_32: Availability = PKCS1.union(Availability::SHA2_32);
const PKCS1_SHA2_64: Availability = PKCS1.union(Availability::SHA2_64);
const PKCS1_SHA3: Availability = PKCS1.union(Availability::SHA3);
const OAEP_SHA2_32: Availability =
    Availability::EME_OAEP.union(Availability::SHA2_32);
const OAEP_SHA2_64: Availability =
    Availability::EME_OAEP.union(Availability::SHA2_64);

/// RSA key loading and generation. The signature and encryption schemes
/// are provided by the key generator's constructor.
pub static RSA: SubTable = SubTable {
    id: SubTableId::Rsa,
    providers: &[
        ProviderSpec {
            requires: Requirement::All(Availability::RSA),
            family: Family::Pubkey,
            constructor: RSA_PUBLIC_KEY_LOAD,
            exclusive: Some(true),
            provides: &[key(Family::Pubkey, KeyType::Rsa)],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::RSA),
            family: Family::Privkey,
            constructor: RSA_PRIVATE_KEY_LOAD,
            exclusive: Some(true),
            provides: &[
                key(Family::Privkey, KeyType::Rsa),
                key(Family::Privkey, KeyType::Any),
            ],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::RSA),
            family: Family::PrivkeyGen,
            constructor: RSA_PRIVATE_KEY_GEN,
            exclusive: Some(false),
            provides: &[
                key(Family::PrivkeyGen, KeyType::Rsa),
                sign(RsaEmsaPkcs1Null).when(PKCS1),
                verify(RsaEmsaPkcs1Null).when(PKCS1),
                /* listed once, a repeat would bind the same constructor again */
                sign(RsaEmsaPkcs1Sha1).when(PKCS1_SHA1),
                verify(RsaEmsaPkcs1Sha1).when(PKCS1_SHA1),
                sign(RsaEmsaPkcs1Sha2_224).when(PKCS1_SHA2_32),
                sign(RsaEmsaPkcs1Sha2_256).when(PKCS1_SHA2_32),
                verify(RsaEmsaPkcs1Sha2_224).when(PKCS1_SHA2_32),
                verify(RsaEmsaPkcs1Sha2_256).when(PKCS1_SHA2_32),
                sign(RsaEmsaPkcs1Sha2_384).when(PKCS1_SHA2_64),
                sign(RsaEmsaPkcs1Sha2_512).when(PKCS1_SHA2_64),
                verify(RsaEmsaPkcs1Sha2_384).when(PKCS1_SHA2_64),
                verify(RsaEmsaPkcs1Sha2_512).when(PKCS1_SHA2_64),
                sign(RsaEmsaPkcs1Sha3_224).when(PKCS1_SHA3),
                sign(RsaEmsaPkcs1Sha3_256).when(PKCS1_SHA3),
                sign(RsaEmsaPkcs1Sha3_384).when(PKCS1_SHA3),
                sign(RsaEmsaPkcs1Sha3_512).when(PKCS1_SHA3),
                verify(RsaEmsaPkcs1Sha3_224).when(PKCS1_SHA3),
                verify(RsaEmsaPkcs1Sha3_256).when(PKCS1_SHA3),
                verify(RsaEmsaPkcs1Sha3_384).when(PKCS1_SHA3),
                verify(RsaEmsaPkcs1Sha3_512).when(PKCS1_SHA3),
                sign(RsaEmsaPss).when(Availability::EMSA_PSSR),
                verify(RsaEmsaPss).when(Availability::EMSA_PSSR),
                decrypt(RsaPkcs1),
                encrypt(RsaPkcs1),
                encrypt(RsaOaepSha224).when(OAEP_SHA2_32),
                encrypt(RsaOaepSha256).when(OAEP_SHA2_32),
                encrypt(RsaOaepSha384).when(OAEP_SHA2_64),
                encrypt(RsaOaepSha512).when(OAEP_SHA2_64),
            ],
        },
    ],
};
