//! The paging loop.

use ldap3::SearchEntry;
use log::debug;

use crate::error::{Error, Result};
use crate::request::SearchRequest;
use crate::source::{PageCookie, PageSource};

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries handed to the sink.
    pub entries: usize,
    /// Search round trips performed.
    pub pages: usize,
}

/// Drives one search across pages until the server returns an empty cookie.
///
/// Entries are handed to the caller's sink as each page arrives; nothing is
/// accumulated. A run is finite for a well-behaved server, but a server that
/// keeps returning non-empty cookies would page forever, so a cap on the
/// number of round trips can be set with [`max_pages`](Self::max_pages).
#[derive(Clone, Copy, Debug, Default)]
pub struct PagedSearchRunner {
    max_pages: Option<usize>,
}

impl PagedSearchRunner {
    pub fn new() -> Self {
        PagedSearchRunner { max_pages: None }
    }

    /// Cap the number of round trips. Exceeding the cap without having seen
    /// an empty cookie fails the run with [`Error::PageLimit`]. Without a
    /// cap the server is trusted to terminate paging.
    pub fn max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }

    /// Run the search to completion, feeding every entry to `sink`.
    ///
    /// The cookie from each response is threaded into the next fetch
    /// unmodified. A response without a paged results control fails with
    /// [`Error::MissingPagedControl`] rather than silently stopping after
    /// one page. Any fetch error aborts the run; there is no retry and no
    /// partial-result recovery.
    pub fn run<P, F>(&self, source: &mut P, request: &SearchRequest, mut sink: F) -> Result<RunSummary>
    where
        P: PageSource,
        F: FnMut(SearchEntry),
    {
        let mut cookie = PageCookie::empty();
        let mut summary = RunSummary::default();
        loop {
            let page = source.fetch(request, &cookie)?;
            summary.pages += 1;
            for entry in page.entries {
                summary.entries += 1;
                sink(entry);
            }
            let next = page.cookie.ok_or(Error::MissingPagedControl)?;
            if next.is_empty() {
                break;
            }
            if let Some(max) = self.max_pages {
                if summary.pages >= max {
                    return Err(Error::PageLimit(summary.pages));
                }
            }
            debug!(
                "page {}: {} entries so far, cookie {} bytes",
                summary.pages,
                summary.entries,
                next.as_bytes().len()
            );
            cookie = next;
        }
        debug!(
            "search done: {} entries in {} pages",
            summary.entries, summary.pages
        );
        Ok(summary)
    }
}
