// Hategate: hate-speech screening for posts and comments.
//
// This is the library root. Each module corresponds to one stage of the
// moderation flow: clean the text, classify it, decide, report.

pub mod classifier;
pub mod config;
pub mod error;
pub mod handlers;
pub mod host;
pub mod output;
pub mod policy;
pub mod settings;
pub mod text;
