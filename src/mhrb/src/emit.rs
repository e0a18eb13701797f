//! Rendering seam between the pipeline and output backends.

use crate::record::CategoryRecords;

/// Error type for output backends
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output backends consume resolved categories through this trait.
///
/// Records arrive with `resolved_ramp_slots` populated. Both the native and
/// resolved slot lists are ordered sequences, and every resolved entry
/// carries an explicit origin (`None` meaning native to the weapon itself),
/// so backends can render provenance without re-deriving it.
pub trait Emitter {
    fn emit_category(&mut self, records: &CategoryRecords) -> Result<(), EmitError>;
}
