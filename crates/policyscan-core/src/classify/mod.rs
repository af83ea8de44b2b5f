//! Keyword classifier — taxonomy scan over document text.

mod classifier;

pub use classifier::TechnologyClassifier;
