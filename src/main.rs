use anyhow::Result;

use swiss_tournament::{handle_command, interpret, open_service};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let service = open_service(cli.database.as_deref())?;
    let result = handle_command(&service, &cli.command);
    service.close();
    result
}
