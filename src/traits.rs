//! # Identity Capability
//!
//! A buffer stores values, not key/value pairs: the key of every entry is
//! derived from the value itself through [`Identifiable::id`].
//!
//! ```text
//!   put(item) ──► item.id() ──► "user:42" ──► map["user:42"] ──► Entry { item, .. }
//! ```
//!
//! ## Contract
//!
//! | Requirement      | Meaning                                                 |
//! |------------------|---------------------------------------------------------|
//! | Stable           | `id()` returns the same string while the value is cached |
//! | Equality-aligned | Values that compare equal report equal ids               |
//! | Deterministic    | No randomness, no dependence on time or global state     |
//!
//! The buffer calls `id()` once per `put`/`update` and stores the result next
//! to the entry, so a value whose id drifts after insertion is still found
//! under the id it had when it was stored.
//!
//! ## Example
//!
//! ```
//! use ttlbuffer::traits::Identifiable;
//!
//! struct Page {
//!     url: String,
//!     body: Vec<u8>,
//! }
//!
//! impl Identifiable for Page {
//!     fn id(&self) -> String {
//!         self.url.clone()
//!     }
//! }
//!
//! let page = Page { url: "https://example.org".into(), body: Vec::new() };
//! assert_eq!(page.id(), "https://example.org");
//! ```

use std::sync::Arc;

/// Capability required of every value stored in a buffer.
pub trait Identifiable {
    /// Returns the stable identifier used as the cache key.
    fn id(&self) -> String;
}

impl Identifiable for String {
    fn id(&self) -> String {
        self.clone()
    }
}

impl Identifiable for str {
    fn id(&self) -> String {
        self.to_owned()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> String {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    fn id(&self) -> String {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Arc<T> {
    fn id(&self) -> String {
        (**self).id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tweet {
        handle: &'static str,
        seq: u32,
    }

    impl Identifiable for Tweet {
        fn id(&self) -> String {
            format!("{}/{}", self.handle, self.seq)
        }
    }

    #[test]
    fn string_is_its_own_id() {
        let s = String::from("alpha");
        assert_eq!(s.id(), "alpha");
        assert_eq!("beta".id(), "beta");
    }

    #[test]
    fn wrappers_delegate_to_inner_id() {
        let tweet = Tweet {
            handle: "ferris",
            seq: 3,
        };
        assert_eq!((&tweet).id(), "ferris/3");
        assert_eq!(
            Box::new(Tweet {
                handle: "ferris",
                seq: 4
            })
            .id(),
            "ferris/4"
        );
        assert_eq!(Arc::new(tweet).id(), "ferris/3");
    }

    #[test]
    fn equal_values_report_equal_ids() {
        let a = Tweet {
            handle: "crab",
            seq: 1,
        };
        let b = Tweet {
            handle: "crab",
            seq: 1,
        };
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }
}
