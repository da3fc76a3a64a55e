use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where a cross-link points: the page identifier and the title to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub id: String,
    pub title: String,
}

impl LinkTarget {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Cross-link resolution table bundled with the namespace its paths live in.
///
/// The table and namespace travel together so a conversion can never see one
/// without the other. Conversion only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResolver {
    namespace: String,
    links: BTreeMap<String, LinkTarget>,
}

impl LinkResolver {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            links: BTreeMap::new(),
        }
    }

    /// Builder-style insert, handy for tests and small literal tables.
    #[must_use]
    pub fn with_link(
        mut self,
        key: impl Into<String>,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.insert(key, LinkTarget::new(id, title));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, target: LinkTarget) -> Option<LinkTarget> {
        self.links.insert(key.into(), target)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn resolve(&self, key: &str) -> Option<&LinkTarget> {
        self.links.get(key)
    }

    /// Path of the page a target points at, inside this resolver's namespace.
    pub fn path_for(&self, target: &LinkTarget) -> String {
        page_path(&self.namespace, &target.id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<K: Into<String>> Extend<(K, LinkTarget)> for LinkResolver {
    fn extend<T: IntoIterator<Item = (K, LinkTarget)>>(&mut self, iter: T) {
        for (key, target) in iter {
            self.insert(key, target);
        }
    }
}

/// Site-relative path of a page: `/wiki/spaces/{namespace}/pages/{id}`.
pub fn page_path(namespace: &str, id: &str) -> String {
    format!("/wiki/spaces/{namespace}/pages/{id}")
}

/// Absolute URL of a page on the given site.
pub fn page_url(base_url: &str, namespace: &str, id: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), page_path(namespace, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_known_keys_only() {
        let resolver = LinkResolver::new("TEAM").with_link("Home", "42", "Home Page");

        assert_eq!(
            resolver.resolve("Home"),
            Some(&LinkTarget::new("42", "Home Page"))
        );
        assert_eq!(resolver.resolve("home"), None);
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn path_uses_namespace_and_id() {
        let resolver = LinkResolver::new("TEAM");
        let target = LinkTarget::new("42", "Home Page");
        assert_eq!(resolver.path_for(&target), "/wiki/spaces/TEAM/pages/42");
    }

    #[test]
    fn page_url_joins_without_double_slash() {
        assert_eq!(
            page_url("https://example.atlassian.net/", "DOCS", "7"),
            "https://example.atlassian.net/wiki/spaces/DOCS/pages/7"
        );
    }

    #[test]
    fn extend_overwrites_existing_keys() {
        let mut resolver = LinkResolver::new("TEAM").with_link("Home", "1", "Old");
        resolver.extend([("Home", LinkTarget::new("2", "New"))]);

        assert_eq!(resolver.resolve("Home").map(|t| t.id.as_str()), Some("2"));
        assert!(!resolver.is_empty());
    }
}
