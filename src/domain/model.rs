use std::fmt;

/// 有序、可重複、以索引存取的字串序列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSeq {
    pub(crate) items: Vec<String>,
}

impl StringSeq {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl From<Vec<String>> for StringSeq {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for StringSeq {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// `[a, b, c]`，空序列為 `[]`
impl fmt::Display for StringSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        assert_eq!(StringSeq::new().to_string(), "[]");
    }

    #[test]
    fn test_display_joins_with_comma_space() {
        let seq: StringSeq = ["cat", "canary", "fish"].into_iter().collect();
        assert_eq!(seq.to_string(), "[cat, canary, fish]");
    }

    #[test]
    fn test_queries() {
        let seq: StringSeq = ["dog", "dog", "fish"].into_iter().collect();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get(2), Some("fish"));
        assert_eq!(seq.get(3), None);
        assert!(seq.contains("dog"));
        assert!(!seq.contains("Dog"));
    }
}
