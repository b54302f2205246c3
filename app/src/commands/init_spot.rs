use anyhow::Result;
use tracing::info;

use crate::cli::InitSpotArgs;
use crate::config::Config;

pub async fn run(config: &Config, args: InitSpotArgs) -> Result<()> {
    let (fee_payer, admin) = super::signers(config, args.admin.as_deref())?;
    let client = super::client(config);

    info!(
        spot_id = %args.spot_id,
        duration_secs = args.duration_secs,
        "initializing spot"
    );
    let signature = client
        .init_spot(&fee_payer, &admin, &args.spot_id, args.duration_secs)
        .await?;

    println!(
        "spot `{}` initialized, auction open for {} seconds",
        args.spot_id, args.duration_secs
    );
    println!("signature: {signature}");
    Ok(())
}
