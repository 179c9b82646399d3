// Host platform interface — content lookup and the moderation queue.
//
// The hosting platform owns triggers, settings storage and report transport.
// Handlers reach it only through the Host trait. FixtureHost is a
// JSON-backed implementation used by the CLI's replay command and the tests.

pub mod fixture;
pub mod models;
pub mod traits;

pub use fixture::FixtureHost;
pub use models::{Comment, FiledReport, Post, ReportTarget, TriggerEvent};
pub use traits::Host;
