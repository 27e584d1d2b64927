use std::process::ExitCode;
use clap::Parser as ClapParser;
use config_lang::{Config, Error};

fn main() -> ExitCode {
    let config: Config = Config::parse();

    // Panics are reported below as a single "Internal error" line
    std::panic::set_hook(Box::new(|_| {}));

    let result = std::panic::catch_unwind(|| config_lang::run(&config))
        .unwrap_or_else(|payload| Err(Error::Internal(config_lang::describe_panic(payload.as_ref()))));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        },
    }
}
