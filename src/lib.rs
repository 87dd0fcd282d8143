//! Paged LDAP directory search.
//!
//! Retrieves the results of a single Search operation in bounded pages using
//! the simple paged results control ([RFC 2696]), threading the server's
//! opaque continuation cookie from each response into the next request until
//! the server returns an empty cookie. The LDAP protocol itself is handled
//! by the [`ldap3`] crate; this crate only drives its paging primitive.
//!
//! The paging loop lives in [`runner::PagedSearchRunner`] and is written
//! against the [`source::PageSource`] trait, so the same loop runs over a
//! live [`ldap3::LdapConn`] in production and over an in-memory directory
//! in tests. Everything is synchronous: pages are intrinsically sequential,
//! since each request carries the cookie from the previous response.
//!
//! [RFC 2696]: https://tools.ietf.org/html/rfc2696

pub mod config;
pub mod error;
pub mod request;
pub mod runner;
pub mod source;

pub use ldap3::{self, Scope, SearchEntry};

pub use crate::error::{Error, Result};
pub use crate::request::SearchRequest;
pub use crate::runner::{PagedSearchRunner, RunSummary};
pub use crate::source::{LdapSource, Page, PageCookie, PageSource};
