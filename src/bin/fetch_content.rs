//! Fetch one blueprint document over HTTP and print it.
//!
//! Usage: fetch_content <blueprint-id> <kind> [locale]
//!
//! Kind is one of: implementation, requirements, validation, project.
//! Locale defaults to DEFAULT_LOCALE (en). Exit code 1 is a transport
//! failure, 3 means the document does not exist.

use std::process;
use std::time::Duration;

use url::Url;

use rwai_arena::catalog::CatalogError;
use rwai_arena::config::Config;
use rwai_arena::content::{ContentError, ContentKind, ContentLoader, HttpSource};
use rwai_arena::locale::Locale;

/// The explicit argument wins; otherwise the configured default must
/// itself parse. A bad DEFAULT_LOCALE is a setup error, not a reason to
/// silently serve English.
fn resolve_locale(arg: Option<String>, default: &str) -> Result<Locale, CatalogError> {
    match arg {
        Some(raw) => Locale::from_segment(&raw),
        None => Locale::from_segment(default),
    }
}

#[tokio::main]
async fn main() {
    let blueprint_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => {
            eprintln!("usage: fetch_content <blueprint-id> <kind> [locale]");
            process::exit(2);
        }
    };
    let kind = match std::env::args().nth(2).as_deref().and_then(ContentKind::from_id) {
        Some(kind) => kind,
        None => {
            eprintln!("kind must be one of: implementation, requirements, validation, project");
            process::exit(2);
        }
    };

    let config = Config::from_env();
    let locale = match resolve_locale(std::env::args().nth(3), &config.default_locale) {
        Ok(locale) => locale,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let base = match Url::parse(&config.content_base_url) {
        Ok(base) => base,
        Err(err) => {
            eprintln!("bad CONTENT_BASE_URL: {err}");
            process::exit(2);
        }
    };

    let source = match HttpSource::new(base, Duration::from_secs(config.fetch_timeout_secs)) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("http client setup failed: {err}");
            process::exit(1);
        }
    };

    let loader = ContentLoader::new(source);
    match loader.load(&blueprint_id, kind, locale).await {
        Ok(text) => print!("{text}"),
        Err(err @ ContentError::NotFound { .. }) => {
            eprintln!("{err}");
            process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
