use std::process::ExitCode;

use rivendor::main as rivendor_main;

fn main() -> ExitCode {
    rivendor_main(std::env::args_os())
}
