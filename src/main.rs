use adder::{command_table, dispatch, PROGRAM};
use adder_parser::CommandLineParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "ADDER_LOG";

// Logs go to stderr; stdout only ever carries the result.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    init_tracing();

    let table = match command_table() {
        Ok(table) => table,
        Err(error) => {
            eprintln!("{PROGRAM}: {error}");
            std::process::exit(1);
        }
    };
    let parser = CommandLineParser::new(PROGRAM, table);
    let bound = parser.parse();

    if let Err(exit_code) = dispatch(&parser, &bound) {
        std::process::exit(exit_code);
    }
}
