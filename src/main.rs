use anyhow::{Context, Result};
use datewalk::calendar::Calendar;
use datewalk::config::Config;
use datewalk::logger;
use datewalk::report::{self, ReportOptions};

fn main() -> Result<()> {
    let config = Config::load_or_default();
    logger::init(&config.logging)?;

    let calendar = Calendar::system();
    log::info!("Building report, zoned line in {}", config.display.zone);

    let lines = report::build(&calendar, &ReportOptions::from(&config.display))?;

    let stdout = std::io::stdout();
    report::print(&lines, &mut stdout.lock()).context("Failed to write report")?;

    Ok(())
}
