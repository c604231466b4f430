// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use super::*;

use crate::algorithm::*;
use crate::feature::Family;
use crate::tables::*;

fn resolved_len(table: &SubTable, available: Availability) -> usize {
    table.resolve(available).iter().map(|p| p.entry_count()).sum()
}

#[test]
fn test_max_len() {
    assert_eq!(DH.max_len(), 13);
    assert_eq!(ECDH.max_len(), 9);
    assert_eq!(CRYPT.max_len(), 24);
    assert_eq!(HASH.max_len(), 11);
    assert_eq!(PRF.max_len(), 5);
    assert_eq!(HMAC.max_len(), 10);
    assert_eq!(PUBKEY.max_len(), 5);
    assert_eq!(PRIVKEY.max_len(), 5);
    assert_eq!(RSA.max_len(), 35);
    assert_eq!(ECDSA.max_len(), 21);
    assert_eq!(ED25519.max_len(), 10);
    assert_eq!(RNG.max_len(), 4);
}

#[test]
fn test_everything_available() {
    for table in [
        &DH, &ECDH, &CRYPT, &HASH, &PRF, &HMAC, &PUBKEY, &PRIVKEY, &RSA,
        &ECDSA, &ED25519, &RNG,
    ] {
        assert_eq!(
            resolved_len(table, Availability::all()),
            table.max_len(),
            "{}",
            table.id
        );
    }
}

#[test]
fn test_nothing_available() {
    for table in [
        &DH, &ECDH, &CRYPT, &PRF, &HMAC, &PUBKEY, &PRIVKEY, &RSA, &ECDSA,
        &ED25519, &RNG,
    ] {
        assert!(table.resolve(Availability::empty()).is_empty());
    }

    /* the hasher is registered even with no digest to provide */
    let hash = HASH.resolve(Availability::empty());
    assert_eq!(hash.len(), 1);
    assert_eq!(hash[0].family, Family::Hasher);
    assert!(hash[0].provides.is_empty());
}

#[test]
fn test_aead_without_aes() {
    let crypt = CRYPT.resolve(Availability::AEAD_CHACHA20_POLY1305);
    assert_eq!(crypt.len(), 1);
    assert_eq!(crypt[0].family, Family::Aead);
    assert_eq!(crypt[0].provides.len(), 1);
    assert_eq!(
        crypt[0].provides[0].algorithm,
        Algorithm::Encryption(EncryptionAlgorithm::Chacha20Poly1305)
    );
    assert_eq!(crypt[0].provides[0].key_size, Some(32));

    /* AES alone is not enough for any mode */
    assert!(CRYPT.resolve(Availability::AES).is_empty());
}

#[test]
fn test_aes_key_sizes() {
    let crypt = CRYPT.resolve(Availability::AES | Availability::MODE_CBC);
    assert_eq!(crypt.len(), 1);
    let sizes: Vec<Option<usize>> =
        crypt[0].provides.iter().map(|p| p.key_size).collect();
    assert_eq!(sizes, vec![Some(16), Some(24), Some(32)]);
}

#[test]
fn test_gated_provides() {
    let hash = HASH.resolve(Availability::SHA2_32 | Availability::SHA3);
    let algs: Vec<Algorithm> =
        hash[0].provides.iter().map(|p| p.algorithm).collect();
    assert_eq!(
        algs,
        [
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha3_224,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha3_384,
            HashAlgorithm::Sha3_512,
        ]
        .map(Algorithm::Hash)
    );

    /* a padding scheme without its digest provides nothing extra */
    let rsa = RSA.resolve(Availability::RSA | Availability::SHA2_64);
    assert_eq!(rsa.len(), 3);
    let schemes: Vec<Family> =
        rsa[2].provides.iter().map(|p| p.family).collect();
    assert_eq!(
        schemes,
        vec![
            Family::PrivkeyGen,
            Family::PrivkeyDecrypt,
            Family::PubkeyEncrypt
        ]
    );
}

#[test]
fn test_rsa_pkcs1_sha1_listed_once() {
    let rsa = RSA.resolve(
        Availability::RSA | Availability::EMSA_PKCS1 | Availability::SHA1,
    );
    let sha1 = Algorithm::Signature(SignatureScheme::RsaEmsaPkcs1Sha1);
    for family in [Family::PrivkeySign, Family::PubkeyVerify] {
        let count = rsa[2]
            .provides
            .iter()
            .filter(|p| p.family == family && p.algorithm == sha1)
            .count();
        assert_eq!(count, 1, "{}", family);
    }
    /* key, the NULL and SHA-1 pairs, PKCS#1 decrypt and encrypt */
    assert_eq!(rsa[2].provides.len(), 7);
}

#[test]
fn test_ecdsa_sha2_64_schemes() {
    let base = Availability::ECDSA | Availability::EMSA1;
    let without = ECDSA.resolve(base | Availability::SHA2_32);
    let with = ECDSA
        .resolve(base | Availability::SHA2_32 | Availability::SHA2_64);

    let ecdsa384 = Algorithm::Signature(SignatureScheme::Ecdsa384);
    assert!(!without[1].provides.iter().any(|p| p.algorithm == ecdsa384));
    assert!(with[1].provides.iter().any(|p| p.algorithm == ecdsa384));
    assert_eq!(with[1].provides.len() - without[1].provides.len(), 8);
}

#[test]
fn test_generic_loaders() {
    let privkey = PRIVKEY.resolve(Availability::ECDSA);
    assert_eq!(privkey.len(), 1);
    assert_eq!(privkey[0].exclusive, Some(true));
    let keys: Vec<Algorithm> =
        privkey[0].provides.iter().map(|p| p.algorithm).collect();
    assert_eq!(keys, [KeyType::Any, KeyType::Ecdsa].map(Algorithm::Key));
}

#[test]
fn test_identity_hasher() {
    let ed = ED25519.resolve(Availability::ED25519);
    assert_eq!(ed.len(), 4);
    let last = &ed[3];
    assert_eq!(last.family, Family::Hasher);
    assert_eq!(last.constructor.symbol(), "return_null");
    assert_eq!(
        last.provides[0].algorithm,
        Algorithm::Hash(HashAlgorithm::Identity)
    );
}

#[test]
fn test_layout() {
    let layout = Layout::standard();
    let ids: Vec<SubTableId> = layout.tables().iter().map(|t| t.id).collect();

    #[cfg(not(feature = "generic_pubkey"))]
    {
        assert_eq!(
            ids,
            vec![
                SubTableId::Dh,
                SubTableId::Ecdh,
                SubTableId::Crypt,
                SubTableId::Hash,
                SubTableId::Prf,
                SubTableId::Hmac,
                SubTableId::PrivKey,
                SubTableId::Rsa,
                SubTableId::Ecdsa,
                SubTableId::Ed25519,
            ]
        );
        assert_eq!(layout.max_len(), 147);
    }
    #[cfg(feature = "generic_pubkey")]
    {
        assert_eq!(ids[6], SubTableId::PubKey);
        assert_eq!(ids[7], SubTableId::PrivKey);
        assert_eq!(layout.max_len(), 152);
    }

    assert_eq!(layout.rng().map(|t| t.id), Some(SubTableId::Rng));

    let trimmed = layout.clone().without(SubTableId::Ecdh);
    assert_eq!(trimmed.tables().len(), layout.tables().len() - 1);
    assert_eq!(trimmed.max_len(), layout.max_len() - ECDH.max_len());
    assert!(layout.without(SubTableId::Rng).rng().is_none());
}
