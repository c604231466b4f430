// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

const DH_CREATE: Constructor = Constructor::new("botan_diffie_hellman_create");

/// MODP Diffie-Hellman groups
pub static DH: SubTable = SubTable {
    id: SubTableId::Dh,
    providers: &[ProviderSpec {
        requires: Requirement::All(Availability::DIFFIE_HELLMAN),
        family: Family::Dh,
        constructor: DH_CREATE,
        exclusive: None,
        provides: &[
            dh(DhGroup::Modp3072),
            dh(DhGroup::Modp4096),
            dh(DhGroup::Modp6144),
            dh(DhGroup::Modp8192),
            dh(DhGroup::Modp2048),
            dh(DhGroup::Modp2048S224),
            dh(DhGroup::Modp2048S256),
            dh(DhGroup::Modp1536),
            dh(DhGroup::Modp1024),
            dh(DhGroup::Modp1024S160),
            dh(DhGroup::Modp768),
            dh(DhGroup::ModpCustom),
        ],
    }],
};
