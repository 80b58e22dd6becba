use std::env;
use std::process;

use tjwiki::cli;

fn main() {
    let args: Vec<String> = env::args().collect();
    process::exit(cli::run_with_args(&args));
}
