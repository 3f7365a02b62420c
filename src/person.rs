//! The benchmarked record shape

use serde::{Deserialize, Serialize};

/// A person record: the single entity both formats encode
///
/// Records carry no identity beyond value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Age in years; generated records stay within `0..100`
    pub age: i32,
    pub email: String,
}

impl Person {
    /// Create a new record
    pub fn new(name: impl Into<String>, age: i32, email: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// The fixed record used by the size comparison
    pub fn sample() -> Self {
        Person::new("John Doe", 30, "johndoe@example.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let person = Person::sample();
        assert_eq!(person.name, "John Doe");
        assert_eq!(person.age, 30);
        assert_eq!(person.email, "johndoe@example.com");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Person::new("a", 1, "b"), Person::new("a".to_string(), 1, "b"));
        assert_ne!(Person::new("a", 1, "b"), Person::new("a", 2, "b"));
    }
}
