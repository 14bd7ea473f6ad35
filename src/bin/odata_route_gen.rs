use odata_route_template::{cli::run_cli, logging};

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
