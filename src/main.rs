// src/main.rs

use fabricmon_config::{cli, run};

fn main() {
    if let Err(err) = run(cli::parse()) {
        eprintln!("fabricmon-config error: {err:?}");
        std::process::exit(1);
    }
}
