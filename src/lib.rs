//! Scene snapshot exporters producing nTiled geometry, light, camera, and scene documents.

/// Snapshot model, light grid generation, coordinate remapping, and document writers.
pub mod export;
