//! External identifiers.
//!
//! An [`Iri`] is an immutable, reference-counted string. Cloning is cheap and
//! equal IRIs built through the same [`crate::DataFactory`] share storage.
//!
//! The identifier is treated as a two-part `namespace + fragment` string:
//! the fragment is whatever follows the last `#` or `/`, the namespace is
//! everything up to and including that separator. No further syntax is
//! checked here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const SEPARATORS: &[char] = &['#', '/'];

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Iri(Arc<str>);

impl Iri {
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Build `namespace + fragment`.
    pub fn from_parts(namespace: &str, fragment: &str) -> Self {
        let mut joined = String::with_capacity(namespace.len() + fragment.len());
        joined.push_str(namespace);
        joined.push_str(fragment);
        Self(Arc::from(joined))
    }

    pub(crate) fn from_arc(raw: Arc<str>) -> Self {
        Self(raw)
    }

    pub(crate) fn arc(&self) -> &Arc<str> {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything up to and including the last `#` or `/`.
    ///
    /// An IRI without a separator is all fragment and has an empty namespace.
    pub fn namespace(&self) -> &str {
        match self.0.rfind(SEPARATORS) {
            Some(pos) => &self.0[..=pos],
            None => "",
        }
    }

    pub fn fragment(&self) -> &str {
        &self.0[self.namespace().len()..]
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Iri {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Iri> for String {
    fn from(value: Iri) -> Self {
        value.0.to_string()
    }
}
