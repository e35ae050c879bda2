#![allow(ambiguous_glob_reexports)]
#![allow(unexpected_cfgs)] // See: https://solana.stackexchange.com/a/19845

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod governance_rewards {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    pub fn create_distribution(
        ctx: Context<CreateDistribution>,
        registration_cutoff: u64,
        registrar: Option<Pubkey>,
    ) -> Result<()> {
        create_distribution::handler(ctx, registration_cutoff, registrar)
    }

    pub fn reclaim_funds(ctx: Context<ReclaimFunds>) -> Result<()> {
        reclaim_funds::handler(ctx)
    }

    pub fn register(ctx: Context<Register>) -> Result<()> {
        register::handler(ctx)
    }

    pub fn update_registration(ctx: Context<UpdateRegistration>) -> Result<()> {
        update_registration::handler(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        claim::handler(ctx)
    }

    pub fn reclaim_user_data(ctx: Context<ReclaimUserData>) -> Result<()> {
        reclaim_user_data::handler(ctx)
    }

    pub fn set_preferred_mint(
        ctx: Context<SetPreferredMint>,
        preferred_mint: Option<Pubkey>,
    ) -> Result<()> {
        set_preferred_mint::handler(ctx, preferred_mint)
    }

    pub fn set_resolution_preference(
        ctx: Context<SetResolutionPreference>,
        resolution_preference: ResolutionPreference,
    ) -> Result<()> {
        set_resolution_preference::handler(ctx, resolution_preference)
    }

    pub fn create_escrow(ctx: Context<CreateEscrow>) -> Result<()> {
        create_escrow::handler(ctx)
    }

    pub fn transfer_from_escrow(ctx: Context<TransferFromEscrow>, amount: u64) -> Result<()> {
        transfer_from_escrow::handler(ctx, amount)
    }
}
