//! Namespaced asset keys
//!
//! Provides [`AssetKey`], the `collection:item` identifier of an asset.

use std::fmt::{self, Display, Formatter};

/// Separator between collection and item
pub const DELIMITER: char = ':';

/// Namespaced asset identifier
///
/// Keys are case-sensitive and compared exactly.
///
/// # Examples
/// - `mdi:home` → collection `mdi`, item `home`
/// - `a:b:c` → collection `a`, item `b` (trailing parts are ignored)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetKey {
    collection: String,
    item: String,
}

/// Outcome of parsing a raw reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParse {
    /// `collection:item`
    Namespaced(AssetKey),
    /// No delimiter at all
    NotNamespaced,
    /// Delimiter present but collection or item is empty
    EmptyPart,
}

impl AssetKey {
    /// Create key from parts
    #[inline]
    #[must_use]
    pub fn new(collection: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            item: item.into(),
        }
    }

    /// Parse a raw reference such as `mdi:home`
    #[must_use]
    pub fn parse(raw: &str) -> KeyParse {
        let mut parts = raw.split(DELIMITER);
        let collection = parts.next().unwrap_or_default();
        let Some(item) = parts.next() else {
            return KeyParse::NotNamespaced;
        };
        if collection.is_empty() || item.is_empty() {
            return KeyParse::EmptyPart;
        }
        KeyParse::Namespaced(Self::new(collection, item))
    }

    /// Collection name
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Item name within the collection
    #[inline]
    #[must_use]
    pub fn item(&self) -> &str {
        &self.item
    }

    /// `collection:item` lookup string
    #[inline]
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.to_string()
    }
}

impl Display for AssetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.collection, self.item)
    }
}

impl KeyParse {
    /// The key, if namespaced
    #[inline]
    #[must_use]
    pub fn key(self) -> Option<AssetKey> {
        match self {
            Self::Namespaced(key) => Some(key),
            Self::NotNamespaced | Self::EmptyPart => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_namespaced() {
        let key = AssetKey::parse("mdi:home").key().unwrap();
        assert_eq!(key.collection(), "mdi");
        assert_eq!(key.item(), "home");
        assert_eq!(key.lookup_key(), "mdi:home");
    }

    #[test]
    fn parse_without_delimiter() {
        assert_eq!(AssetKey::parse("home"), KeyParse::NotNamespaced);
        assert_eq!(AssetKey::parse(""), KeyParse::NotNamespaced);
    }

    #[test]
    fn parse_ignores_trailing_parts() {
        let key = AssetKey::parse("a:b:c").key().unwrap();
        assert_eq!(key, AssetKey::new("a", "b"));
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert_eq!(AssetKey::parse(":home"), KeyParse::EmptyPart);
        assert_eq!(AssetKey::parse("mdi:"), KeyParse::EmptyPart);
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_ne!(
            AssetKey::parse("MDI:home").key(),
            AssetKey::parse("mdi:home").key()
        );
    }
}
