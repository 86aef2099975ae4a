//! Model artifacts: on-disk format, loading and residency

mod file_loader;
mod linear;
mod registry;

pub use file_loader::FileModelLoader;
pub use linear::{LinearClassifier, ModelArtifact, StandardScaler};
pub use registry::ModelRegistry;
