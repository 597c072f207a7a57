use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

/// Initialize stderr logging. Debug output stays off unless asked for.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::init(level, Config::default());
}
