//! Sweeps the board inventory with a filled toolbox and prints what the
//! contractor does to each board.

use std::io;
use std::process::ExitCode;

use tracing::{error, info};

use carpentry::contractor::Contractor;
use carpentry::logging;
use carpentry::settings::Settings;
use carpentry::tool::fill_toolbox;

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
            error!(error = %e, "workflow failed");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> carpentry::Result<()> {
    // fill a toolbox
    let toolbox = fill_toolbox(settings.driver, settings.puller);
    let mut supply = settings.supply();
    let mut boards = settings.boards.clone();
    info!(
        driver = ?settings.driver,
        puller = ?settings.puller,
        supply = supply.count(),
        "toolbox filled"
    );

    // hire a contractor and put them to work
    let mut out = io::stdout().lock();
    let report =
        Contractor::new().process_boards(&toolbox, &mut supply, &mut boards, &mut out)?;
    info!(untouched = report.untouched, supply = supply.count(), "work complete");
    Ok(())
}
