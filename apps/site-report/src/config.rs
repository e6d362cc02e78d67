//! Run configuration: JSON file first, command-line overrides second.
//!
//! ```json
//! { "bound_multiplier": 2.0, "num_threads": 8 }
//! ```
//!
//! The legacy key `BoundMulti` is accepted for `bound_multiplier`; unrelated
//! keys (access tokens, HTTP timeouts) are ignored.

use std::path::Path;

use anyhow::{Context, Result};

use tos_visit::VisitConfig;

/// Load `path` if given, else start from defaults, then apply overrides.
pub fn resolve(
    path:       Option<&Path>,
    multiplier: Option<f32>,
    threads:    Option<usize>,
) -> Result<VisitConfig> {
    let mut config = match path {
        Some(p) => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("opening config {}", p.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => VisitConfig::default(),
    };

    if let Some(m) = multiplier {
        config.bound_multiplier = m;
    }
    if threads.is_some() {
        config.num_threads = threads;
    }
    config.validate()?;
    Ok(config)
}
