use std::io;

use first_class::{driver};

fn main() -> io::Result<()> {
    env_logger::init();
    let mut output = io::stdout().lock();
    driver::run(&mut output)?;
    log::info!("Done");
    Ok(())
}
