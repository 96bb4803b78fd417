use anyhow::Result;
use clap::Parser;
use word_window::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("word_window=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
