use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::escrow::{ESCROW_AUTHORITY_SEED, ESCROW_SEED};

/// Creates the token account `admin` releases `user`'s rewards in `mint` from.
#[derive(Accounts)]
pub struct CreateEscrow<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [
            realm.key().as_ref(),
            admin.key().as_ref(),
            ESCROW_SEED,
            user.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump,
        token::mint = mint,
        token::authority = escrow_authority
    )]
    pub escrow: Box<Account<'info, TokenAccount>>,
    /// CHECK: PDA owning every escrow of the realm
    #[account(seeds = [ESCROW_AUTHORITY_SEED, realm.key().as_ref()], bump)]
    pub escrow_authority: UncheckedAccount<'info>,
    /// CHECK: Only used as a seed
    pub realm: UncheckedAccount<'info>,
    /// CHECK: Only used as a seed
    pub admin: UncheckedAccount<'info>,
    /// CHECK: Only used as a seed
    pub user: UncheckedAccount<'info>,
    pub mint: Box<Account<'info, Mint>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateEscrow>) -> Result<()> {
    msg!(
        "Created escrow {} for {}",
        ctx.accounts.escrow.key(),
        ctx.accounts.user.key()
    );

    Ok(())
}
