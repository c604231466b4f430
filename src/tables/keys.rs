// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

const PUBLIC_KEY_LOAD: Constructor = Constructor::new("botan_public_key_load");
const PRIVATE_KEY_LOAD: Constructor =
    Constructor::new("botan_private_key_load");

/* any key type the generic loaders can parse */
static ANY_KEY_TYPE: [Availability; 3] =
    [Availability::RSA, Availability::ECDSA, Availability::ED25519];

/// Generic public key loader, detecting the key type from the encoding.
///
/// Not part of the standard layout unless the `generic_pubkey` feature is
/// enabled.
pub static PUBKEY: SubTable = SubTable {
    id: SubTableId::PubKey,
    providers: &[ProviderSpec {
        requires: Requirement::Any(&ANY_KEY_TYPE),
        family: Family::Pubkey,
        constructor: PUBLIC_KEY_LOAD,
        exclusive: Some(true),
        provides: &[
            key(Family::Pubkey, KeyType::Any),
            key(Family::Pubkey, KeyType::Rsa).when(Availability::RSA),
            key(Family::Pubkey, KeyType::Ecdsa).when(Availability::ECDSA),
            key(Family::Pubkey, KeyType::Ed25519).when(Availability::ED25519),
        ],
    }],
};

/// Generic private key loader, detecting the key type from the encoding
pub static PRIVKEY: SubTable = SubTable {
    id: SubTableId::PrivKey,
    providers: &[ProviderSpec {
        requires: Requirement::Any(&ANY_KEY_TYPE),
        family: Family::Privkey,
        constructor: PRIVATE_KEY_LOAD,
        exclusive: Some(true),
        provides: &[
            key(Family::Privkey, KeyType::Any),
            key(Family::Privkey, KeyType::Rsa).when(Availability::RSA),
            key(Family::Privkey, KeyType::Ecdsa).when(Availability::ECDSA),
            key(Family::Privkey, KeyType::Ed25519)
                .when(Availability::ED25519),
        ],
    }],
};
