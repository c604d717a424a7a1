//! Generated record types.
//!
//! This module defines the clean records emitted by the base generator and
//! the corrupted records returned to callers.

use serde::{Deserialize, Serialize};

/// The three personal fields subject to corruption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonFields {
    /// Full name, in the region's customary order.
    pub name: String,
    /// Postal address on one line.
    pub address: String,
    /// Phone number as written locally.
    pub phone: String,
}

/// A clean record produced by the base generator.
///
/// Records are never mutated after creation; corruption derives a new
/// [`CorruptedRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// 1-based position in the deterministic stream.
    pub index: u64,
    /// Stable identifier (a UUID in hyphenated form).
    pub identifier: String,
    /// Clean, pre-corruption fields.
    pub fields: PersonFields,
}

/// A record whose fields have passed through the misspelling engine.
///
/// # Example
///
/// ```
/// use persona_data::{CorruptedRecord, PersonFields, Record};
///
/// let record = Record {
///     index: 1,
///     identifier: "00000000-0000-0000-0000-000000000001".to_owned(),
///     fields: PersonFields {
///         name: "Ada Lovelace".to_owned(),
///         address: "12 Marylebone Rd".to_owned(),
///         phone: "555-0100".to_owned(),
///     },
/// };
/// let corrupted = CorruptedRecord::derive(&record, PersonFields {
///     name: "Ada Lovelcae".to_owned(),
///     ..record.fields.clone()
/// });
///
/// assert_eq!(corrupted.index, record.index);
/// assert_eq!(corrupted.fields.name, "Ada Lovelcae");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorruptedRecord {
    /// Index carried over from the clean record.
    pub index: u64,
    /// Identifier carried over from the clean record.
    pub identifier: String,
    /// Corrupted fields.
    #[serde(flatten)]
    pub fields: PersonFields,
}

impl CorruptedRecord {
    /// Pairs corrupted fields with the index and identifier of `record`.
    #[must_use]
    pub fn derive(record: &Record, fields: PersonFields) -> Self {
        Self {
            index: record.index,
            identifier: record.identifier.clone(),
            fields,
        }
    }
}
