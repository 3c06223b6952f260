//! Scalar cells stored by the typed façades (`Map`, `Record`).

use core::fmt;
use core::hash::{Hash, Hasher};

/// Tag of a [`Scalar`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    Int,
    Float,
    Bool,
    Bytes,
}

/// A single primitive value. Nested containers are not representable.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i32),
    Float(f64),
    Bool(bool),
    Bytes(Box<[u8]>),
}

impl Scalar {
    /// The type-default value for `kind`: 0, 0.0, false or empty bytes.
    pub fn zero(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Int => Scalar::Int(0),
            ScalarKind::Float => Scalar::Float(0.0),
            ScalarKind::Bool => Scalar::Bool(false),
            ScalarKind::Bytes => Scalar::Bytes(Box::default()),
        }
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Bytes(_) => ScalarKind::Bytes,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Scalar::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Scalar::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Scalar::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Scalar::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Byte payload viewed as UTF-8; `None` for other kinds or invalid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| core::str::from_utf8(b).ok())
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Bytes(v.as_bytes().into())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Bytes(v.into_bytes().into_boxed_slice())
    }
}

impl From<&[u8]> for Scalar {
    fn from(v: &[u8]) -> Self {
        Scalar::Bytes(v.into())
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Bytes(v.into_boxed_slice())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
        }
    }
}

/// Key cell for [`crate::Map`]: integer or byte string.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum MapKey {
    Int(i32),
    Bytes(Box<[u8]>),
}

// Integers go through `write_i32` and byte strings through `write` so the
// runtime hasher can pick a hash per key kind. No discriminant is mixed in.
impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            MapKey::Int(v) => state.write_i32(*v),
            MapKey::Bytes(b) => state.write(b),
        }
    }
}

impl From<i32> for MapKey {
    fn from(v: i32) -> Self {
        MapKey::Int(v)
    }
}

impl From<&str> for MapKey {
    fn from(v: &str) -> Self {
        MapKey::Bytes(v.as_bytes().into())
    }
}

impl From<String> for MapKey {
    fn from(v: String) -> Self {
        MapKey::Bytes(v.into_bytes().into_boxed_slice())
    }
}

impl From<&[u8]> for MapKey {
    fn from(v: &[u8]) -> Self {
        MapKey::Bytes(v.into())
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Int(v) => write!(f, "{v}"),
            MapKey::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_per_kind() {
        assert_eq!(Scalar::zero(ScalarKind::Int), Scalar::Int(0));
        assert_eq!(Scalar::zero(ScalarKind::Float), Scalar::Float(0.0));
        assert_eq!(Scalar::zero(ScalarKind::Bool), Scalar::Bool(false));
        assert_eq!(Scalar::zero(ScalarKind::Bytes).as_bytes(), Some(&[][..]));
        for kind in [
            ScalarKind::Int,
            ScalarKind::Float,
            ScalarKind::Bool,
            ScalarKind::Bytes,
        ] {
            assert_eq!(Scalar::zero(kind).kind(), kind);
        }
    }

    #[test]
    fn typed_views_reject_other_kinds() {
        let s = Scalar::from("hi");
        assert_eq!(s.as_str(), Some("hi"));
        assert_eq!(s.as_int(), None);
        assert_eq!(Scalar::from(7).as_float(), None);
        assert_eq!(Scalar::from(true).as_bool(), Some(true));
        assert_eq!(Scalar::from(vec![0xff, 0xfe]).as_str(), None);
    }

    #[test]
    fn int_and_string_keys_are_distinct() {
        assert_ne!(MapKey::from(1), MapKey::from("1"));
        assert_eq!(MapKey::from("k"), MapKey::from(String::from("k")));
    }
}
