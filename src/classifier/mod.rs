// Hate-speech classification — trait-based so handlers can be driven by
// any scorer.
//
// ModerateHatespeechClient is the production implementation. Tests swap in
// scripted classifiers behind the same Classifier trait.

pub mod mhs;
pub mod models;
pub mod traits;

pub use mhs::ModerateHatespeechClient;
pub use models::{linearize, ClassificationResult, FeedbackReportKind, Label};
pub use traits::Classifier;
