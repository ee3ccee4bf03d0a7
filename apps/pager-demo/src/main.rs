use clap::Parser;
use pager_demo::{run, Cli, DemoOptions};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::from_cli(Cli::parse())?;
    print!("{}", run(&options)?);
    Ok(())
}
