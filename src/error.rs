//! Error types for island routing.
//!
//! Only two conditions are real failures: normalizing by an empty population
//! table, and distributing a resource the source does not hold. Everything
//! else degrades gracefully (unreachable locations, missing table entries).

/// Errors raised by the routing and distribution operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// The population table has no entries, so there is no maximum to
    /// normalize against.
    #[error("population table is empty")]
    EmptyPopulationTable,

    /// The source location holds no entry for the requested resource.
    #[error("resource {resource:?} not found on {location}")]
    ResourceNotFound {
        /// Source location.
        location: String,
        /// Requested resource name.
        resource: String,
    },

    /// A dataset could not be decoded.
    #[error("invalid dataset: {0}")]
    Dataset(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RoutingError::EmptyPopulationTable.to_string(),
            "population table is empty"
        );
        let err = RoutingError::ResourceNotFound {
            location: "Tahiti".into(),
            resource: "taro".into(),
        };
        assert_eq!(err.to_string(), "resource \"taro\" not found on Tahiti");
    }
}
