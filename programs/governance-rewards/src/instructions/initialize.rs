use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    pub payer: Signer<'info>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    msg!(
        "governance-rewards v{} initialized by {}",
        env!("CARGO_PKG_VERSION"),
        ctx.accounts.payer.key()
    );

    Ok(())
}
