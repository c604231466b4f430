// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

const RNG_CREATE: Constructor = Constructor::new("botan_rng_create");

/// Random number generators, seeded from the system RNG through a DRBG
pub static RNG: SubTable = SubTable {
    id: SubTableId::Rng,
    providers: &[ProviderSpec {
        requires: Requirement::All(
            Availability::SYSTEM_RNG.union(Availability::HMAC_DRBG),
        ),
        family: Family::Rng,
        constructor: RNG_CREATE,
        exclusive: None,
        provides: &[
            rng(RngQuality::Weak),
            rng(RngQuality::Strong),
            rng(RngQuality::True),
        ],
    }],
};
