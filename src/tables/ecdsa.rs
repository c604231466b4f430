// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use SignatureScheme::*;

const EC_PRIVATE_KEY_LOAD: Constructor =
    Constructor::new("botan_ec_private_key_load");
const EC_PRIVATE_KEY_GEN: Constructor =
    Constructor::new("botan_ec_private_key_gen");

const EMSA1_SHA1: Availability = Availability::EMSA1.union(Availability::SHA1);
const EMSA1_SHA2_32: Availability =
    Availability::EMSA1.union(Availability::SHA2_32);
const EMSA1_SHA2_64: Availability =
    Availability::EMSA1.union(Availability::SHA2_64);

/// ECDSA key loading and generation, with the signature schemes provided
/// by the key generator's constructor
pub static ECDSA: SubTable = SubTable {
    id: SubTableId::Ecdsa,
    providers: &[
        ProviderSpec {
            requires: Requirement::All(Availability::ECDSA),
            family: Family::Privkey,
            constructor: EC_PRIVATE_KEY_LOAD,
            exclusive: Some(true),
            provides: &[
                key(Family::Privkey, KeyType::Ecdsa),
                key(Family::Privkey, KeyType::Any),
            ],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::ECDSA),
            family: Family::PrivkeyGen,
            constructor: EC_PRIVATE_KEY_GEN,
            exclusive: Some(false),
            provides: &[
                key(Family::PrivkeyGen, KeyType::Ecdsa),
                sign(EcdsaWithNull).when(Availability::EMSA_RAW),
                verify(EcdsaWithNull).when(Availability::EMSA_RAW),
                sign(EcdsaWithSha1Der).when(EMSA1_SHA1),
                verify(EcdsaWithSha1Der).when(EMSA1_SHA1),
                sign(EcdsaWithSha256Der).when(EMSA1_SHA2_32),
                verify(EcdsaWithSha256Der).when(EMSA1_SHA2_32),
                sign(Ecdsa256).when(EMSA1_SHA2_32),
                verify(Ecdsa256).when(EMSA1_SHA2_32),
                sign(EcdsaWithSha384Der).when(EMSA1_SHA2_64),
                sign(EcdsaWithSha512Der).when(EMSA1_SHA2_64),
                verify(EcdsaWithSha384Der).when(EMSA1_SHA2_64),
                verify(EcdsaWithSha512Der).when(EMSA1_SHA2_64),
                sign(Ecdsa384).when(EMSA1_SHA2_64),
                sign(Ecdsa521).when(EMSA1_SHA2_64),
                verify(Ecdsa384).when(EMSA1_SHA2_64),
                verify(Ecdsa521).when(EMSA1_SHA2_64),
            ],
        },
    ],
};
