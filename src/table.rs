// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! The merged feature table and the assembler that fills it.

use std::ops::Deref;

use crate::algorithm::Algorithm;
use crate::availability::Availability;
use crate::feature::{Constructor, Family, Feature, Provider};
use crate::tables::SubTable;

/// Contiguous, ordered table of every feature a backend advertises
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureTable {
    providers: Vec<Provider>,
    features: Vec<Feature>,
}

impl FeatureTable {
    /// Empty table with storage reserved for `capacity` entries
    pub fn with_capacity(capacity: usize) -> FeatureTable {
        FeatureTable {
            providers: Vec::new(),
            features: Vec::with_capacity(capacity),
        }
    }

    /// Appends the entries of `table` available with the given
    /// capabilities, after everything added so far, and returns how many
    /// entries were added. A sub-table with nothing available adds none.
    pub fn add(&mut self, table: &SubTable, available: Availability) -> usize {
        let before = self.features.len();
        for provider in table.resolve(available) {
            self.features.extend(provider.features());
            self.providers.push(provider);
        }
        self.features.len() - before
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the backend advertises nothing
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Flat entries, in order
    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }

    /// Registered providers, in order
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// The first constructor providing `algorithm` under `family`.
    ///
    /// When `key_size` is given only entries with that exact constraint
    /// match, otherwise any entry does. Earlier registrations win.
    pub fn lookup(
        &self,
        family: Family,
        algorithm: Algorithm,
        key_size: Option<usize>,
    ) -> Option<Constructor> {
        self.features
            .iter()
            .filter(|f| f.is_provide())
            .find(|f| {
                f.family == family
                    && f.algorithm == Some(algorithm)
                    && (key_size.is_none() || f.key_size == key_size)
            })
            .map(|f| f.constructor)
    }
}

impl Deref for FeatureTable {
    type Target = [Feature];

    fn deref(&self) -> &[Feature] {
        &self.features
    }
}

/// Assembles `tables` in order into one table sized for their combined
/// upper bound
pub fn assemble(
    tables: &[&SubTable],
    available: Availability,
) -> FeatureTable {
    let capacity = tables.iter().map(|t| t.max_len()).sum();
    let mut table = FeatureTable::with_capacity(capacity);
    for t in tables {
        table.add(t, available);
    }
    table
}
