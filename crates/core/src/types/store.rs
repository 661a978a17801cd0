//! Store identity resolution, including the virtual "All" store.
//!
//! One store exists outside persistence: id -1, named "All". It is a sentinel
//! recognized by identifier value alone - never stored, never editable. Its
//! shopping-list projection flattens every department into a single "General"
//! zone, so code that resolves a store identifier must distinguish it from a
//! real row before touching the database.

use std::fmt;
use std::str::FromStr;

use super::id::StoreId;

/// Identifier of the virtual "All" store.
pub const ALL_STORE_ID: i32 = -1;

/// Display name of the virtual "All" store.
///
/// A persisted store with this exact name is filtered out of listings so the
/// sentinel stays unique.
pub const ALL_STORE_NAME: &str = "All";

/// A resolved store identifier: either the virtual "All" store or a real row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSelector {
    /// The virtual "All" store (id -1).
    All,
    /// A persisted store, looked up by id.
    Store(StoreId),
}

impl StoreSelector {
    /// Resolve an integer store identifier.
    #[must_use]
    pub const fn from_id(id: i32) -> Self {
        if id == ALL_STORE_ID {
            Self::All
        } else {
            Self::Store(StoreId::new(id))
        }
    }

    /// Whether this selector denotes the virtual "All" store.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The persisted store id, if this selector denotes a real store.
    #[must_use]
    pub const fn store_id(&self) -> Option<StoreId> {
        match self {
            Self::All => None,
            Self::Store(id) => Some(*id),
        }
    }
}

impl fmt::Display for StoreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_STORE_ID}"),
            Self::Store(id) => write!(f, "{id}"),
        }
    }
}

/// Error parsing a store identifier that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid store identifier: {0:?}")]
pub struct ParseStoreSelectorError(pub String);

impl FromStr for StoreSelector {
    type Err = ParseStoreSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self::from_id)
            .map_err(|_| ParseStoreSelectorError(s.to_owned()))
    }
}
