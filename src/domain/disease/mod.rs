//! Disease domain - catalogue of prediction pages and their advice blocks

mod advice;
mod entity;

pub use advice::{Assessment, Outcome};
pub use entity::{Disease, FeatureField};
