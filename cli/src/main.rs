use clap::Parser;
use pubchem_cli::args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pubchem_cli::init_tracing(cli.log_filter());

    pubchem_cli::run(cli).await
}
