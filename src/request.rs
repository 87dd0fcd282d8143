//! Search request parameters.

use std::num::NonZeroU32;

use ldap3::Scope;

/// Parameters of one paged search, immutable for the duration of a run.
///
/// The page size bounds the number of entries fetched per round trip and is
/// kept as a [`NonZeroU32`], which rules out the protocol-invalid sizes of
/// zero and below at construction time.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub(crate) base_dn: String,
    pub(crate) filter: String,
    pub(crate) attrs: Vec<String>,
    pub(crate) scope: Scope,
    pub(crate) page_size: NonZeroU32,
}

impl SearchRequest {
    /// Create a request for a subtree search returning all user attributes.
    pub fn new<B, F>(base_dn: B, filter: F, page_size: NonZeroU32) -> Self
    where
        B: Into<String>,
        F: Into<String>,
    {
        SearchRequest {
            base_dn: base_dn.into(),
            filter: filter.into(),
            attrs: vec![],
            scope: Scope::Subtree,
            page_size,
        }
    }

    /// Set the attributes to return. An empty list requests all user
    /// attributes, per the LDAP convention.
    pub fn attrs<S: Into<String>>(mut self, attrs: Vec<S>) -> Self {
        self.attrs = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the search scope.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}
