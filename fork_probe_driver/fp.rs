extern crate env_logger;
extern crate fork_probe_driver;
#[macro_use]
extern crate log;

use std::process;

fn main() {
    env_logger::init();

    // Returning from `main` ends a launcher without waiting for its probe.
    if let Err(e) = fork_probe_driver::run(std::env::args()) {
        eprintln!("error: {}", e);
        debug!("{}", e.call_stack());
        process::exit(1);
    }
}
