//! Fake-value provider backed by the `fake` crate.
//!
//! Every generated value is drawn through a seeded [`StdRng`], so a source
//! built from a given seed (or prefix) always produces the same value
//! stream. Each top-level synthesis builds a fresh source, which keeps
//! concurrent callers independent.

use chrono::{DateTime, Utc};
use fake::faker::address::en::PostCode;
use fake::faker::internet::en::{DomainSuffix, SafeEmail, IPv4, IPv6};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::source::ValueSource;

/// Upper bound for generated timestamps (2100-01-01T00:00:00Z).
const MAX_TIMESTAMP_MILLIS: i64 = 4_102_444_800_000;

/// Derive the provider seed from a document prefix: the sum of the
/// prefix's character codes. Equal prefixes therefore always seed equal
/// value streams.
pub fn seed_for(prefix: &str) -> u64 {
    prefix.chars().map(|c| c as u64).sum()
}

/// Deterministic [`ValueSource`] over the `fake` crate.
pub struct FakerSource {
    rng: StdRng,
}

impl FakerSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_prefix(prefix: &str) -> Self {
        Self::seeded(seed_for(prefix))
    }
}

impl ValueSource for FakerSource {
    fn integer(&mut self) -> i64 {
        self.rng.gen_range(0..100_000)
    }

    fn boolean(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn timestamp(&mut self) -> DateTime<Utc> {
        let millis = self.rng.gen_range(0..MAX_TIMESTAMP_MILLIS);
        DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn domain(&mut self) -> String {
        let word: String = Word().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("{}.{}", word, suffix)
    }

    fn ipv4(&mut self) -> String {
        IPv4().fake_with_rng(&mut self.rng)
    }

    fn ipv6(&mut self) -> String {
        IPv6().fake_with_rng(&mut self.rng)
    }

    fn url(&mut self) -> String {
        let word: String = Word().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("https://{}.{}", word, suffix)
    }

    fn token(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn zip_code(&mut self) -> String {
        PostCode().fake_with_rng(&mut self.rng)
    }

    fn phone(&mut self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        for c in template.chars() {
            match c {
                '#' => out.push(char::from(b'0' + self.rng.gen_range(0..10u8))),
                _ => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_for_sums_character_codes() {
        assert_eq!(seed_for(""), 0);
        assert_eq!(seed_for("a"), 97);
        assert_eq!(seed_for("ab"), 97 + 98);
    }

    #[test]
    fn test_equal_seeds_yield_equal_streams() {
        let mut a = FakerSource::seeded(7);
        let mut b = FakerSource::seeded(7);

        assert_eq!(a.integer(), b.integer());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.token(17), b.token(17));
        assert_eq!(a.timestamp(), b.timestamp());
    }

    #[test]
    fn test_token_shape() {
        let token = FakerSource::from_prefix("mock").token(17);
        assert_eq!(token.len(), 17);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_phone_template_expansion() {
        let phone = FakerSource::seeded(1).phone("07### ######");
        assert_eq!(phone.len(), 12);
        assert!(phone.starts_with("07"));
        assert_eq!(&phone[5..6], " ");
        assert!(phone[2..5].chars().all(|c| c.is_ascii_digit()));
        assert!(phone[6..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_ip_values_parse() {
        let mut source = FakerSource::seeded(42);
        assert!(source.ipv4().parse::<std::net::Ipv4Addr>().is_ok());
        assert!(source.ipv6().parse::<std::net::Ipv6Addr>().is_ok());
    }

    #[test]
    fn test_timestamp_in_range() {
        let ts = FakerSource::seeded(3).timestamp();
        assert!(ts.timestamp_millis() >= 0);
        assert!(ts.timestamp_millis() < MAX_TIMESTAMP_MILLIS);
    }
}
