#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions, // Rust naming conventions
    clippy::missing_errors_doc,      // error enum documents itself
    clippy::missing_panics_doc,      // only the infallible JSON expect
    clippy::must_use_candidate,      // accessors on Pattern / SearchQuery
)]

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod pattern;
pub mod query;
pub mod types;

pub use config::Config;
pub use error::WildError;
pub use filter::{FilterResult, LineMatch, Selector, filter_lines};
pub use pattern::{Pattern, Segment, Token, compile};
pub use query::{AllowedKinds, MatchKind, SearchQuery};
pub use types::{Mode, Position};

/// One filter run as the CLI issues it.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub pattern: &'a str,
    pub config: Config,
    /// Raw `START..END` argument, parsed here so errors carry the text.
    pub range: Option<&'a str>,
}

/// The single entry point for the CLI. Everything flows through here:
/// parse range → build selector → filter lines → return formatted string.
pub fn run(request: &Request<'_>, input: &str) -> Result<String, WildError> {
    let range = request
        .range
        .map(|raw| {
            types::parse_range(raw).ok_or_else(|| WildError::InvalidQuery {
                query: raw.to_string(),
                reason: "expected START..END byte offsets".into(),
            })
        })
        .transpose()?;

    let cfg = &request.config;
    let selector = Selector::new(request.pattern, cfg.mode, cfg.ignore_case, cfg.literal);
    let result = filter_lines(input, request.pattern, &selector, range);

    Ok(if cfg.json {
        format::json(&result)
    } else {
        format::plain(&result)
    })
}
