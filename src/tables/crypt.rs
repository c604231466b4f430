// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use EncryptionAlgorithm::*;

const CRYPTER_CREATE: Constructor = Constructor::new("botan_crypter_create");
const AEAD_CREATE: Constructor = Constructor::new("botan_aead_create");

const AES_CBC: Availability = Availability::AES.union(Availability::MODE_CBC);
const AES_GCM: Availability = Availability::AES.union(Availability::AEAD_GCM);
const AES_CCM: Availability = Availability::AES.union(Availability::AEAD_CCM);

/* the AEAD constructor is registered if any of its modes can be provided */
static AEAD_MODES: [Availability; 3] =
    [AES_GCM, AES_CCM, Availability::AEAD_CHACHA20_POLY1305];

/// AES-CBC crypters and the AEAD modes
pub static CRYPT: SubTable = SubTable {
    id: SubTableId::Crypt,
    providers: &[
        ProviderSpec {
            requires: Requirement::All(AES_CBC),
            family: Family::Crypter,
            constructor: CRYPTER_CREATE,
            exclusive: None,
            provides: &[
                crypter(AesCbc).sized(16),
                crypter(AesCbc).sized(24),
                crypter(AesCbc).sized(32),
            ],
        },
        ProviderSpec {
            requires: Requirement::Any(&AEAD_MODES),
            family: Family::Aead,
            constructor: AEAD_CREATE,
            exclusive: None,
            provides: &[
                aead(AesGcmIcv16).sized(16).when(AES_GCM),
                aead(AesGcmIcv16).sized(24).when(AES_GCM),
                aead(AesGcmIcv16).sized(32).when(AES_GCM),
                aead(AesGcmIcv12).sized(16).when(AES_GCM),
                aead(AesGcmIcv12).sized(24).when(AES_GCM),
                aead(AesGcmIcv12).sized(32).when(AES_GCM),
                aead(AesGcmIcv8).sized(16).when(AES_GCM),
                aead(AesGcmIcv8).sized(24).when(AES_GCM),
                aead(AesGcmIcv8).sized(32).when(AES_GCM),
                aead(AesCcmIcv16).sized(16).when(AES_CCM),
                aead(AesCcmIcv16).sized(24).when(AES_CCM),
                aead(AesCcmIcv16).sized(32).when(AES_CCM),
                aead(AesCcmIcv12).sized(16).when(AES_CCM),
                aead(AesCcmIcv12).sized(24).when(AES_CCM),
                aead(AesCcmIcv12).sized(32).when(AES_CCM),
                aead(AesCcmIcv8).sized(16).when(AES_CCM),
                aead(AesCcmIcv8).sized(24).when(AES_CCM),
                aead(AesCcmIcv8).sized(32).when(AES_CCM),
                aead(Chacha20Poly1305)
                    .sized(32)
                    .when(Availability::AEAD_CHACHA20_POLY1305),
            ],
        },
    ],
};
