use std::process::ExitCode;

use sprig_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    sprig_driver::run(&argument)
}
