use thiserror::Error;

use crate::proj::TransformFailure;

/// Result type alias for area-engine operations.
pub type Result<T> = std::result::Result<T, AreaError>;

/// Errors surfaced by the area engine.
///
/// Malformed WKT is deliberately absent: unparseable or empty input is a
/// defined empty result, not an error (batch pipelines rely on this to
/// skip degenerate records without interrupting a run).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AreaError {
    /// Reprojection produced an invalid coordinate. Fatal for the query;
    /// carries the source WKT so the offending record can be located.
    #[error("reprojection failed for geometry `{wkt}`: {reason}")]
    Reprojection { wkt: String, reason: String },
}

impl AreaError {
    pub(crate) fn reprojection(wkt: &str, failure: TransformFailure) -> Self {
        AreaError::Reprojection { wkt: wkt.to_string(), reason: failure.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprojection_message_names_the_geometry() {
        let err = AreaError::reprojection(
            "POLYGON((0 0, 1 0, 1 1, 0 0))",
            TransformFailure("non-finite UTM coordinate".to_string()),
        );
        let message = err.to_string();
        assert!(message.contains("POLYGON((0 0, 1 0, 1 1, 0 0))"));
        assert!(message.contains("non-finite"));
    }
}
