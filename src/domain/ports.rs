use std::cmp::Ordering;

/// 逐元素的純函數轉換
pub trait Transform {
    fn apply(&self, value: &str) -> String;
}

impl<F> Transform for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, value: &str) -> String {
        self(value)
    }
}

/// 三向比較器
pub trait Comparator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Comparator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Transform for Uppercase {
    fn apply(&self, value: &str) -> String {
        value.to_uppercase()
    }
}

/// Natural ordering: byte-wise, which for UTF-8 equals code point order. No locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl Comparator for NaturalOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.as_bytes().cmp(b.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase() {
        assert_eq!(Uppercase.apply("koala"), "KOALA");
    }

    #[test]
    fn test_natural_order_is_case_sensitive() {
        assert_eq!(NaturalOrder.compare("KOALA", "zebra"), Ordering::Less);
        assert_eq!(NaturalOrder.compare("zebra", "IGUANA"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare("fish", "fish"), Ordering::Equal);
    }

    #[test]
    fn test_closures_implement_ports() {
        let exclaim = |s: &str| format!("{}!", s);
        assert_eq!(exclaim.apply("dog"), "dog!");

        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare("cat", "canary"), Ordering::Less);
    }
}
