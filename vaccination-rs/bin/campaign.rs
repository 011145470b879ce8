use std::{io, process};

use log::*;
use vaccination::prelude::*;

pub fn main() {
    use simple_logger::SimpleLogger;
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).init() {
        eprintln!("could not initialize logger: {}", e);
    }

    let cfg = match Config::load_or_default(CONFIG_FILE) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    debug!("{:#?}", cfg);

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = simple_campaign(&cfg, &mut stdout.lock(), &mut stderr.lock()) {
        error!("{}", e);
        process::exit(1);
    }
}
