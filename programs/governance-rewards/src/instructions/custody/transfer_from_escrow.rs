use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::{
    error::GovernanceRewardsError,
    state::escrow::{ESCROW_AUTHORITY_SEED, ESCROW_SEED},
};

#[derive(Accounts)]
pub struct TransferFromEscrow<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [
            realm.key().as_ref(),
            admin.key().as_ref(),
            ESCROW_SEED,
            user.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump
    )]
    pub escrow: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = to_account.mint == escrow.mint @ GovernanceRewardsError::WrongMint
    )]
    pub to_account: Box<Account<'info, TokenAccount>>,
    /// CHECK: PDA owning every escrow of the realm
    #[account(seeds = [ESCROW_AUTHORITY_SEED, realm.key().as_ref()], bump)]
    pub escrow_authority: UncheckedAccount<'info>,
    /// CHECK: Only used as a seed
    pub realm: UncheckedAccount<'info>,
    /// CHECK: Only used as a seed
    pub user: UncheckedAccount<'info>,
    pub mint: Box<Account<'info, Mint>>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<TransferFromEscrow>, amount: u64) -> Result<()> {
    let realm = ctx.accounts.realm.key();
    let bump = [ctx.bumps.escrow_authority];
    let seeds: [&[u8]; 3] = [ESCROW_AUTHORITY_SEED, realm.as_ref(), &bump];

    token::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.escrow.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.to_account.to_account_info(),
                authority: ctx.accounts.escrow_authority.to_account_info(),
            },
            &[&seeds[..]],
        ),
        amount,
        ctx.accounts.mint.decimals,
    )
}
