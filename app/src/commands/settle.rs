use anyhow::Result;
use tracing::{info, warn};

use crate::cli::SettleArgs;
use crate::config::Config;

pub async fn run(config: &Config, args: SettleArgs) -> Result<()> {
    let (fee_payer, admin) = super::signers(config, args.admin.as_deref())?;
    let client = super::client(config);

    info!(spot_id = %args.spot_id, "settling spot");
    let signature = client.settle(&fee_payer, &admin, &args.spot_id).await?;

    println!("spot `{}` settled", args.spot_id);
    println!("signature: {signature}");

    match client.transaction_events(&signature).await {
        Ok(events) => super::print_events(&events),
        Err(err) => warn!(%err, "could not fetch transaction events"),
    }
    Ok(())
}
