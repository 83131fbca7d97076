use clap::Parser;
use regit_cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = regit_cli::run_main(cli) {
        eprintln!("regit: {err:#}");
        std::process::exit(1);
    }
}
