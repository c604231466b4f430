// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use HashAlgorithm::*;

const HASHER_CREATE: Constructor = Constructor::new("botan_hasher_create");

/// Digests. The hasher constructor is always registered.
pub static HASH: SubTable = SubTable {
    id: SubTableId::Hash,
    providers: &[ProviderSpec {
        requires: Requirement::ALWAYS,
        family: Family::Hasher,
        constructor: HASHER_CREATE,
        exclusive: None,
        provides: &[
            hasher(Md5).when(Availability::MD5),
            hasher(Sha1).when(Availability::SHA1),
            hasher(Sha224).when(Availability::SHA2_32),
            hasher(Sha256).when(Availability::SHA2_32),
            hasher(Sha384).when(Availability::SHA2_64),
            hasher(Sha512).when(Availability::SHA2_64),
            hasher(Sha3_224).when(Availability::SHA3),
            hasher(Sha3_256).when(Availability::SHA3),
            hasher(Sha3_384).when(Availability::SHA3),
            hasher(Sha3_512).when(Availability::SHA3),
        ],
    }],
};
