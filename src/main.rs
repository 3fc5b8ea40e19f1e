mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    cli::run()
}
