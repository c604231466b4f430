// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

const ECDH_CREATE: Constructor =
    Constructor::new("botan_ec_diffie_hellman_create");
const X25519_CREATE: Constructor = Constructor::new("botan_x25519_create");

/// Elliptic curve groups, NIST and Brainpool, then Curve25519
pub static ECDH: SubTable = SubTable {
    id: SubTableId::Ecdh,
    providers: &[
        ProviderSpec {
            requires: Requirement::All(Availability::ECDH),
            family: Family::Dh,
            constructor: ECDH_CREATE,
            exclusive: None,
            provides: &[
                dh(DhGroup::Ecp256),
                dh(DhGroup::Ecp384),
                dh(DhGroup::Ecp521),
                dh(DhGroup::Ecp256Bp),
                dh(DhGroup::Ecp384Bp),
                dh(DhGroup::Ecp512Bp),
            ],
        },
        ProviderSpec {
            requires: Requirement::All(Availability::X25519),
            family: Family::Dh,
            constructor: X25519_CREATE,
            exclusive: None,
            provides: &[dh(DhGroup::Curve25519)],
        },
    ],
};
