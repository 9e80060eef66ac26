use anyhow::Context;

use stockroom_cli::{Config, Session};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    stockroom_observability::init_with(&config.log);

    tracing::info!("starting stockroom");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        Inventory::with_policy(config.duplicates),
        stdin.lock(),
        stdout.lock(),
    );

    if let Err(err) = session.run() {
        tracing::error!(error = %err, "console session failed");
        return Err(err).context("console session failed");
    }

    Ok(())
}
