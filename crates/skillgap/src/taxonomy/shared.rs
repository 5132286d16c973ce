//! Process-wide taxonomy cache.
//!
//! The taxonomy is loaded once and shared read-only. The first caller
//! performs the load; concurrent callers block until it is ready and then
//! receive the same `Arc`. A failed load is not cached, so a later call
//! observes the error again rather than a poisoned cache.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::errors::EngineError;
use crate::taxonomy::SkillTaxonomy;

static SHARED: OnceCell<Arc<SkillTaxonomy>> = OnceCell::new();

/// Returns the process-wide taxonomy, loading the bundled dataset on first
/// use. Callers that need a custom source should load it themselves with
/// [`SkillTaxonomy::from_path`] and share the `Arc` explicitly.
pub fn shared() -> Result<Arc<SkillTaxonomy>, EngineError> {
    SHARED
        .get_or_try_init(|| SkillTaxonomy::bundled().map(Arc::new))
        .cloned()
}
