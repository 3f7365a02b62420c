//! Random record generation
//!
//! The generator owns its random source, so a seeded generator always
//! produces the same sequence of records.
//!
//! # Examples
//!
//! ```
//! use codec_bench::generator::RecordGenerator;
//!
//! let mut a = RecordGenerator::from_seed(7);
//! let mut b = RecordGenerator::from_seed(7);
//! assert_eq!(a.generate_batch(3), b.generate_batch(3));
//! ```

use crate::person::Person;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::debug;

/// Alphabet for random names and email local parts
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated names
pub const NAME_LEN: usize = 10;

/// Length of the random part of generated emails
pub const EMAIL_LOCAL_LEN: usize = 15;

/// Domain appended to every generated email
pub const EMAIL_DOMAIN: &str = "@example.com";

/// Range of generated ages
pub const AGE_RANGE: Range<i32> = 0..100;

/// Produces randomized [`Person`] records
#[derive(Debug, Clone)]
pub struct RecordGenerator<R> {
    rng: R,
}

impl RecordGenerator<StdRng> {
    /// Create a deterministic generator from a seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RecordGenerator<R> {
    /// Create a generator drawing from the given random source
    pub fn new(rng: R) -> Self {
        RecordGenerator { rng }
    }

    /// Generate one record
    pub fn generate(&mut self) -> Person {
        let name = self.random_string(NAME_LEN);
        let age = self.rng.gen_range(AGE_RANGE);
        let mut email = self.random_string(EMAIL_LOCAL_LEN);
        email.push_str(EMAIL_DOMAIN);

        Person { name, age, email }
    }

    /// Generate `count` records
    pub fn generate_batch(&mut self, count: usize) -> Vec<Person> {
        debug!(count, "Generating records");
        self.by_ref().take(count).collect()
    }

    /// Random string of `len` characters drawn uniformly from [`CHARSET`]
    pub fn random_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| CHARSET[self.rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }
}

impl<R: Rng> Iterator for RecordGenerator<R> {
    type Item = Person;

    fn next(&mut self) -> Option<Person> {
        Some(self.generate())
    }
}
