use anyhow::Context;
use std::io::{self, Write};
use template_go_lib::{report, BuildInfo, Reported, VersionProvider};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let provider = BuildInfo::from_build(env!("CARGO_PKG_VERSION"));
    write_report(&provider, io::stdout().lock(), io::stderr().lock())
}

/// Reports through `provider`, treating a closed output pipe as a normal end.
fn write_report<P, O, E>(provider: &P, out: O, err: E) -> anyhow::Result<()>
where
    P: VersionProvider + ?Sized,
    O: Write,
    E: Write,
{
    match report(provider, out, err) {
        // A failed lookup has already been reported on stderr and keeps the zero exit status.
        Ok(Reported::LookupFailed) => {
            log::debug!("Exiting without version details");
            Ok(())
        }
        Ok(Reported::Details) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed early: {error}");
            Ok(())
        }
        Err(error) => Err(error).context("Failed to write version details"),
    }
}
