//! Calls the embedded user's `notify` through the inner path and through the
//! forwarding method on the admin. Both lines come out the same.

use std::io;
use std::process::ExitCode;

use tracing::{debug, error};

use carpentry::logging;
use carpentry::settings::Settings;

fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("info");
            error!(error = %e, "could not load settings");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&settings.log_filter);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "could not send notification");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> carpentry::Result<()> {
    let admin = &settings.admin;
    debug!(name = admin.name(), level = admin.level(), "admin constructed");

    let mut out = io::stdout().lock();
    // long way, through the inner user
    admin.user().notify(&mut out)?;
    // forwarded straight from the admin
    admin.notify(&mut out)?;
    Ok(())
}
