// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use IntegrityAlgorithm::*;

const HMAC_SIGNER_CREATE: Constructor =
    Constructor::new("botan_hmac_signer_create");

/// HMAC integrity signers, per digest and truncation length
pub static HMAC: SubTable = SubTable {
    id: SubTableId::Hmac,
    providers: &[ProviderSpec {
        requires: Requirement::All(Availability::HMAC),
        family: Family::Signer,
        constructor: HMAC_SIGNER_CREATE,
        exclusive: None,
        provides: &[
            signer(HmacSha1_96).when(Availability::SHA1),
            signer(HmacSha1_128).when(Availability::SHA1),
            signer(HmacSha1_160).when(Availability::SHA1),
            signer(HmacSha2_256_128).when(Availability::SHA2_32),
            signer(HmacSha2_256_256).when(Availability::SHA2_32),
            signer(HmacSha2_384_192).when(Availability::SHA2_64),
            signer(HmacSha2_384_384).when(Availability::SHA2_64),
            signer(HmacSha2_512_256).when(Availability::SHA2_64),
            signer(HmacSha2_512_512).when(Availability::SHA2_64),
        ],
    }],
};
