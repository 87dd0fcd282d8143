//! Error types.
//!
//! Failures come in two kinds, both fatal and never retried. A *connection*
//! error means the session could not be established or maintained; a
//! *protocol* error means the server rejected or could not complete the
//! operation, or broke the paging contract. [`ldap3::LdapError`] values are
//! sorted into the two kinds by [`From`], so `?` does the classification.

use ldap3::LdapError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The session could not be established or maintained.
    #[error("LDAP connection error: {0}")]
    Connection(#[source] LdapError),
    /// The server rejected or failed the operation.
    #[error("LDAP protocol error: {0}")]
    Protocol(#[source] LdapError),
    /// A search response carried no paged results control, so the server
    /// cannot be asked for further pages.
    #[error("server returned no paged results control; paging unsupported")]
    MissingPagedControl,
    /// The server was still handing out non-empty cookies when the
    /// configured page cap was reached.
    #[error("no empty cookie after {0} pages, giving up")]
    PageLimit(usize),
}

impl From<LdapError> for Error {
    fn from(err: LdapError) -> Error {
        match err {
            LdapError::LdapResult { .. } | LdapError::FilterParsing | LdapError::AdapterInit(_) => {
                Error::Protocol(err)
            }
            _ => Error::Connection(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ldap3::LdapResult;

    fn op_result(rc: u32) -> LdapError {
        LdapError::LdapResult {
            result: LdapResult {
                rc,
                matched: String::new(),
                text: String::new(),
                refs: vec![],
                ctrls: vec![],
            },
        }
    }

    #[test]
    fn server_rejection_is_protocol() {
        // rc=2 is protocolError in RFC 4511 terms
        assert!(matches!(Error::from(op_result(2)), Error::Protocol(_)));
        assert!(matches!(Error::from(op_result(50)), Error::Protocol(_)));
    }

    #[test]
    fn transport_failure_is_connection() {
        let err = LdapError::Io {
            source: std::io::Error::new(std::io::ErrorKind::ConnectionReset, "dropped"),
        };
        assert!(matches!(Error::from(err), Error::Connection(_)));
    }
}
