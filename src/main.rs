use anyhow::{Context, Result};
use clap::Parser;
use ldap3::{LdapConn, LdapConnSettings};
use log::{debug, info};

use paged_search::config::Cli;
use paged_search::{LdapSource, PagedSearchRunner, SearchRequest};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = LdapConnSettings::new()
        .set_starttls(cli.starttls)
        .set_no_tls_verify(cli.no_tls_verify);
    let mut conn = LdapConn::with_settings(settings, &cli.url)
        .with_context(|| format!("connecting to {}", cli.url))?;
    if let Some(bind_dn) = &cli.bind_dn {
        conn.simple_bind(bind_dn, &cli.bind_password)
            .and_then(ldap3::LdapResult::success)
            .with_context(|| format!("binding as {}", bind_dn))?;
        debug!("bound as {}", bind_dn);
    }

    let request = SearchRequest::new(cli.base, cli.filter, cli.page_size)
        .attrs(cli.attrs)
        .scope(cli.scope.into());
    let mut runner = PagedSearchRunner::new();
    if let Some(max) = cli.max_pages {
        runner = runner.max_pages(max.get());
    }

    let run_result = {
        let mut source = LdapSource::new(&mut conn);
        runner.run(&mut source, &request, |entry| println!("{}", entry.dn))
    };
    // Unbind even when the run failed; a failed run is the more useful error.
    let unbind_result = conn.unbind();
    let summary = run_result?;
    unbind_result?;
    info!("{} entries in {} pages", summary.entries, summary.pages);
    Ok(())
}
