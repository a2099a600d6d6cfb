// src/filter.rs
//! Scope filtering of discovered names against a root domain

/// Keeps names that are the root domain itself or a proper subdomain of it
///
/// Comparison is exact byte equality. Names are not case-folded.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    root: String,
    dotted_root: String,
}

impl ScopeFilter {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            dotted_root: format!(".{}", root),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `true` if `name` equals the root or ends with `.` + root
    pub fn is_in_scope(&self, name: &str) -> bool {
        name == self.root || name.ends_with(&self.dotted_root)
    }

    /// Retain only in-scope names, keeping their order
    pub fn apply<I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        names.into_iter().filter(|n| self.is_in_scope(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let filter = ScopeFilter::new("example.com");
        assert!(filter.is_in_scope("example.com"));
    }

    #[test]
    fn test_subdomain_match() {
        let filter = ScopeFilter::new("example.com");

        assert!(filter.is_in_scope("www.example.com"));
        assert!(filter.is_in_scope("api.example.com"));
        assert!(filter.is_in_scope("deep.sub.example.com"));
    }

    #[test]
    fn test_no_match() {
        let filter = ScopeFilter::new("example.com");

        assert!(!filter.is_in_scope("notexample.com"));
        assert!(!filter.is_in_scope("evilexample.com.attacker.net"));
        assert!(!filter.is_in_scope("example.org"));
        assert!(!filter.is_in_scope("examplecom"));
        assert!(!filter.is_in_scope(".com"));
        assert!(!filter.is_in_scope(""));
    }

    #[test]
    fn test_case_sensitive() {
        let filter = ScopeFilter::new("example.com");
        assert!(!filter.is_in_scope("WWW.EXAMPLE.COM"));
    }

    #[test]
    fn test_apply_keeps_order_and_duplicates() {
        let filter = ScopeFilter::new("example.com");
        let names = vec![
            "b.example.com".to_string(),
            "other.org".to_string(),
            "a.example.com".to_string(),
            "b.example.com".to_string(),
        ];
        assert_eq!(
            filter.apply(names),
            vec!["b.example.com", "a.example.com", "b.example.com"]
        );
    }
}
