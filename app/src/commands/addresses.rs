use anyhow::Result;
use spotlight_client::pda;
use spotlight_client::state::validate_spot_id;

use crate::cli::AddressesArgs;
use crate::config::Config;

pub fn run(config: &Config, args: AddressesArgs) -> Result<()> {
    validate_spot_id(&args.spot_id)?;
    let (spot_state, spot_bump) = pda::derive_spot_state(&args.spot_id, &config.program_id);
    let (escrow_vault, vault_bump) = pda::derive_escrow_vault(&args.spot_id, &config.program_id);

    println!("program:      {}", config.program_id);
    println!("spot state:   {spot_state} (bump {spot_bump})");
    println!("escrow vault: {escrow_vault} (bump {vault_bump})");
    Ok(())
}
