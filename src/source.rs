//! Page retrieval.
//!
//! [`PageSource`] is the seam between the paging loop and the LDAP library:
//! one fetch is one Search round trip carrying a paged results control.
//! [`LdapSource`] is the production implementation over a bound
//! [`LdapConn`]; tests drive the loop with an in-memory source instead.

use ldap3::controls::{Control, ControlType, PagedResults, RawControl};
use ldap3::{LdapConn, SearchEntry};

use crate::error::Result;
use crate::request::SearchRequest;

/// Opaque paging cursor issued by the server.
///
/// The bytes are passed back to the server unmodified on the next fetch and
/// are never inspected beyond the emptiness check; an empty cookie is the
/// server's signal that no further pages remain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCookie(Vec<u8>);

impl PageCookie {
    pub fn empty() -> Self {
        PageCookie(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PageCookie {
    fn from(bytes: Vec<u8>) -> Self {
        PageCookie(bytes)
    }
}

/// One page of search results.
#[derive(Clone, Debug)]
pub struct Page {
    /// Entries in server order.
    pub entries: Vec<SearchEntry>,
    /// Cookie from the response's paged results control, `None` when the
    /// server sent no such control.
    pub cookie: Option<PageCookie>,
}

/// A directory that can be searched one page at a time.
pub trait PageSource {
    /// Execute the search with a paged results control carrying the
    /// request's page size and the given cookie; an empty cookie starts a
    /// new paged search.
    fn fetch(&mut self, request: &SearchRequest, cookie: &PageCookie) -> Result<Page>;
}

/// [`PageSource`] over a live LDAP connection.
///
/// Borrows the connection exclusively for the duration of the run; binding
/// beforehand and unbinding afterwards are the caller's business.
pub struct LdapSource<'a> {
    conn: &'a mut LdapConn,
}

impl<'a> LdapSource<'a> {
    pub fn new(conn: &'a mut LdapConn) -> Self {
        LdapSource { conn }
    }
}

impl PageSource for LdapSource<'_> {
    fn fetch(&mut self, request: &SearchRequest, cookie: &PageCookie) -> Result<Page> {
        // The control's size field is an i32 on the wire; a page size above
        // i32::MAX is indistinguishable from "no limit" for any real server.
        let size = i32::try_from(request.page_size.get()).unwrap_or(i32::MAX);
        let control: RawControl = PagedResults {
            size,
            cookie: cookie.as_bytes().to_vec(),
        }
        .into();
        let (entries, res) = self
            .conn
            .with_controls(control)
            .search(
                &request.base_dn,
                request.scope,
                &request.filter,
                request.attrs.clone(),
            )?
            .success()?;
        let mut next = None;
        for ctrl in res.ctrls {
            if let Control(Some(ControlType::PagedResults), ref raw) = ctrl {
                let pr: PagedResults = raw.parse();
                next = Some(PageCookie::from(pr.cookie));
                break;
            }
        }
        Ok(Page {
            entries: entries.into_iter().map(SearchEntry::construct).collect(),
            cookie: next,
        })
    }
}
