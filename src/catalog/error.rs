//! Catalog error types.

/// Errors returned by [`Catalog`](super::Catalog) mutations.
///
/// Identifiers are carried in their `Display` form so the error type does not
/// depend on the catalog's item type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An item with this identifier is already in the catalog.
    #[error("an item with id {id} already exists, nothing was added")]
    DuplicateId {
        /// The conflicting identifier.
        id: String,
    },

    /// No item with this identifier is in the catalog.
    #[error("no item found with id {id}")]
    NotFound {
        /// The missing identifier.
        id: String,
    },
}

impl CatalogError {
    pub(crate) fn duplicate_id(id: &impl std::fmt::Display) -> Self {
        Self::DuplicateId { id: id.to_string() }
    }

    pub(crate) fn not_found(id: &impl std::fmt::Display) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CatalogError::duplicate_id(&"act_1"), "an item with id act_1 already exists, nothing was added")]
    #[case(CatalogError::not_found(&"imp_7"), "no item found with id imp_7")]
    fn test_display(#[case] error: CatalogError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
