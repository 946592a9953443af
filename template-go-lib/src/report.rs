//! Prints version details, or the reason they could not be looked up.

use crate::provider::VersionProvider;
use std::io::{self, Write};

/// Reminder printed after the version details of a freshly templated project.
pub const ADVISORY: &str = "Don't forget to update all instances of 'template-go'! 😅";

/// Prefix of the message written when the lookup fails.
pub const LOOKUP_FAILURE_PREFIX: &str = "could not get version details";

/// Which branch [`report`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reported {
    Details,
    LookupFailed,
}

/// Looks up version details from `provider` and writes the outcome.
///
/// On success the details, an empty line and [`ADVISORY`] go to `out`. On
/// failure a single `could not get version details: <reason>` message goes
/// to `err` and nothing is written to `out`. A failed lookup is not an error
/// of this function; only failures to write are.
pub fn report<P, O, E>(provider: &P, mut out: O, mut err: E) -> io::Result<Reported>
where
    P: VersionProvider + ?Sized,
    O: Write,
    E: Write,
{
    log::debug!("Looking up version details");

    let details = match provider.details() {
        Ok(details) => details,
        Err(reason) => {
            log::warn!("Version lookup failed: {reason}");
            write!(err, "{LOOKUP_FAILURE_PREFIX}: {reason}")?;
            err.flush()?;
            return Ok(Reported::LookupFailed);
        }
    };

    log::debug!("Found version details: {details:?}");
    writeln!(out, "{details}")?;
    writeln!(out)?;
    writeln!(out, "{ADVISORY}")?;
    out.flush()?;
    Ok(Reported::Details)
}
