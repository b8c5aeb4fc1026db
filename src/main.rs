use clap::Parser;
use verange::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = verange::logging::init();

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}
