// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use PseudoRandomFunction::*;

const HMAC_PRF_CREATE: Constructor = Constructor::new("botan_hmac_prf_create");

/// HMAC based PRFs
pub static PRF: SubTable = SubTable {
    id: SubTableId::Prf,
    providers: &[ProviderSpec {
        requires: Requirement::All(Availability::HMAC),
        family: Family::Prf,
        constructor: HMAC_PRF_CREATE,
        exclusive: None,
        provides: &[
            prf(HmacSha1).when(Availability::SHA1),
            prf(HmacSha2_256).when(Availability::SHA2_32),
            prf(HmacSha2_384).when(Availability::SHA2_64),
            prf(HmacSha2_512).when(Availability::SHA2_64),
        ],
    }],
};
