use clap::Parser;

use catalog_cli::Cli;

fn main() {
    let cli = Cli::parse();
    if cli.pretty_logs {
        catalog_observability::init_pretty();
    } else {
        catalog_observability::init();
    }

    let stdout = std::io::stdout();
    if let Err(err) = catalog_cli::run(cli, &mut stdout.lock()) {
        tracing::error!(error = %format!("{err:#}"), "catalog command failed");
        eprintln!("catalog: {err:#}");
        std::process::exit(1);
    }
}
