//! The value-source port consumed by the synthesizer.

use chrono::{DateTime, Utc};

/// Provider of concrete fake values.
///
/// The synthesizer pulls every generated (non-explicit) value through this
/// trait, so callers can substitute their own source to isolate concurrent
/// runs or to pin outputs. Implementations are expected to be deterministic
/// for a given seed; see [`crate::adapters::faker::FakerSource`].
pub trait ValueSource {
    fn integer(&mut self) -> i64;
    fn boolean(&mut self) -> bool;
    fn timestamp(&mut self) -> DateTime<Utc>;
    fn email(&mut self) -> String;
    fn domain(&mut self) -> String;
    fn ipv4(&mut self) -> String;
    fn ipv6(&mut self) -> String;
    fn url(&mut self) -> String;
    /// Alphanumeric token of exactly `len` characters.
    fn token(&mut self, len: usize) -> String;
    fn zip_code(&mut self) -> String;
    /// Phone number following a digit template where every `#` becomes a
    /// random digit and every other character is kept verbatim.
    fn phone(&mut self, template: &str) -> String;
}
