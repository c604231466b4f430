// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

const ED_PUBLIC_KEY_LOAD: Constructor =
    Constructor::new("botan_ed_public_key_load");
const ED_PRIVATE_KEY_LOAD: Constructor =
    Constructor::new("botan_ed_private_key_load");
const ED_PRIVATE_KEY_GEN: Constructor =
    Constructor::new("botan_ed_private_key_gen");
/* registered pro forma, never instantiated */
const RETURN_NULL: Constructor = Constructor::new("return_null");

/// Ed25519 key loading and generation.
///
/// Ed25519 signatures hash internally, so a pro forma identity hasher is
/// registered for consumers that look up the signature's digest.
pub static ED25519: SubTable = SubTable {
    id: SubTableId::Ed25519,
    providers: &[
        ProviderSpec {
            requires: Requirement::All(Availability::ED25519),
            family: Family::Pubkey,
            constructor: ED_PUBLIC_KEY_LOAD,
            exclusive: Some(true),
            provides: &[key(Family::Pubkey, KeyType::Ed25519)],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::ED25519),
            family: Family::Privkey,
            constructor: ED_PRIVATE_KEY_LOAD,
            exclusive: Some(true),
            provides: &[key(Family::Privkey, KeyType::Ed25519)],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::ED25519),
            family: Family::PrivkeyGen,
            constructor: ED_PRIVATE_KEY_GEN,
            exclusive: Some(false),
            provides: &[
                key(Family::PrivkeyGen, KeyType::Ed25519),
                sign(SignatureScheme::Ed25519),
                verify(SignatureScheme::Ed25519),
            ],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::ED25519),
            family: Family::Hasher,
            constructor: RETURN_NULL,
            exclusive: None,
            provides: &[hasher(HashAlgorithm::Identity)],
        },
    ],
};
