//! Command-line interface.

use std::num::{NonZeroU32, NonZeroUsize};

use clap::{Parser, ValueEnum};
use ldap3::Scope;

#[derive(Parser, Debug)]
#[command(name = "paged-search")]
#[command(about = "Search an LDAP directory with the simple paged results control")]
pub struct Cli {
    /// LDAP server URL
    #[arg(long, default_value = "ldap://localhost:389")]
    pub url: String,

    /// DN to bind as; anonymous bind when omitted
    #[arg(long)]
    pub bind_dn: Option<String>,

    /// Password for the bind DN
    #[arg(long, default_value = "")]
    pub bind_password: String,

    /// Base DN of the search
    #[arg(long)]
    pub base: String,

    /// Search filter
    #[arg(long, default_value = "(objectClass=*)")]
    pub filter: String,

    /// Attribute to return; repeat for more than one, omit for all
    #[arg(long = "attr", value_name = "NAME")]
    pub attrs: Vec<String>,

    /// Search scope
    #[arg(long, value_enum, default_value = "sub")]
    pub scope: SearchScope,

    /// Entries per page, at least 1
    #[arg(long, default_value = "500")]
    pub page_size: NonZeroU32,

    /// Fail if the server has not finished paging after this many pages
    #[arg(long)]
    pub max_pages: Option<NonZeroUsize>,

    /// Negotiate STARTTLS after connecting
    #[arg(long)]
    pub starttls: bool,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub no_tls_verify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchScope {
    /// Only the base object
    Base,
    /// Objects immediately below the base
    One,
    /// The base object and its whole subtree
    Sub,
}

impl From<SearchScope> for Scope {
    fn from(scope: SearchScope) -> Scope {
        match scope {
            SearchScope::Base => Scope::Base,
            SearchScope::One => Scope::OneLevel,
            SearchScope::Sub => Scope::Subtree,
        }
    }
}
