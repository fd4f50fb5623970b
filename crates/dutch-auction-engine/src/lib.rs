/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! Dutch auction engine: a registry of independent, time-bounded auctions whose
//! asking price decreases linearly until a buyer accepts it, the seller stops
//! the auction or it expires.

#![no_std]

mod errors; // Error codes and the `validate!` macro.
mod auctions; // Registry, price decay, lifecycle and settlement.
mod events; // Notifications.
mod math; // Checked arithmetic.
mod types; // Contract types.

use soroban_sdk::{contract, contractimpl, contractmeta, vec, Address, Env, String, Vec};

use crate::auctions::{
    behavior::BaseAuction, behavior_descending_price::DescendingPriceAuction, registry,
    settlement,
};

pub use errors::Error;
pub use types::{AuctionData, Receipt};

/// Fallback lifetime of an auction created with a zero duration (2 days).
pub const DEFAULT_DURATION: u64 = 2 * 24 * 60 * 60;

/// Percentage of the final price withheld from the seller.
pub const FEE: i128 = 10;

contractmeta!(
    key = "desc",
    val = "Dutch auction engine with linear price decay and fee settlement"
);

pub trait AuctionEngineTrait {
    // Set the registry owner, the settlement currency and the deployment constants.
    // `default_duration` must be non-zero and `fee` a percentage within 0..=100.
    // Can only be called once.
    fn initialize(
        env: Env,
        owner: Address,
        currency: Address,
        default_duration: u64,
        fee: i128,
    ) -> Result<(), Error>;

    // Create a new auction and return its index.
    // A zero `duration` falls back to the default duration.
    // Requires `starting_price >= discount_rate * duration`.
    // Seller authorization required.
    fn create(
        env: Env,
        seller: Address,
        starting_price: i128,
        discount_rate: i128,
        item: String,
        duration: u64,
    ) -> Result<u64, Error>;

    // Buy the auction at the current price.
    // `tendered_amount` is collected from the buyer, the seller receives the price
    // minus fee and the buyer is refunded any overpayment.
    // Buyer authorization required.
    fn buy(env: Env, buyer: Address, auction_id: u64, tendered_amount: i128)
        -> Result<Receipt, Error>;

    // Cancel an active auction. No funds move.
    // Seller authorization required.
    fn stop(env: Env, caller: Address, auction_id: u64) -> Result<(), Error>;

    // Current asking price of an active auction.
    // No authorization required.
    fn price_for(env: Env, auction_id: u64) -> Result<i128, Error>;

    // Retrieve auction data for an existing auction.
    // No authorization required.
    fn get_auction(env: Env, auction_id: u64) -> Result<AuctionData, Error>;

    // Number of auctions created so far.
    fn auction_count(env: Env) -> Result<u64, Error>;

    fn owner(env: Env) -> Result<Address, Error>;

    fn currency(env: Env) -> Result<Address, Error>;

    fn default_duration(env: Env) -> Result<u64, Error>;

    fn fee(env: Env) -> Result<i128, Error>;

    // Fees withheld from sellers and not yet withdrawn.
    fn accrued_fees(env: Env) -> Result<i128, Error>;

    // Transfer all accrued fees to `to` and return the amount.
    // Owner authorization required.
    fn withdraw_fees(env: Env, to: Address) -> Result<i128, Error>;

    // Retrieve the contract version.
    fn version(env: Env) -> Vec<u32>;
}

#[contract]
pub struct AuctionEngine;

#[contractimpl]
impl AuctionEngineTrait for AuctionEngine {
    fn initialize(
        env: Env,
        owner: Address,
        currency: Address,
        default_duration: u64,
        fee: i128,
    ) -> Result<(), Error> {
        registry::initialize(&env, &owner, &currency, default_duration, fee)
    }

    fn create(
        env: Env,
        seller: Address,
        starting_price: i128,
        discount_rate: i128,
        item: String,
        duration: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();
        registry::create(&env, &seller, starting_price, discount_rate, &item, duration)
    }

    fn buy(
        env: Env,
        buyer: Address,
        auction_id: u64,
        tendered_amount: i128,
    ) -> Result<Receipt, Error> {
        buyer.require_auth();
        DescendingPriceAuction.buy(&env, &buyer, auction_id, tendered_amount)
    }

    fn stop(env: Env, caller: Address, auction_id: u64) -> Result<(), Error> {
        caller.require_auth();
        DescendingPriceAuction.stop(&env, &caller, auction_id)
    }

    fn price_for(env: Env, auction_id: u64) -> Result<i128, Error> {
        registry::price_for(&env, auction_id)
    }

    fn get_auction(env: Env, auction_id: u64) -> Result<AuctionData, Error> {
        registry::load_auction(&env, auction_id)
    }

    fn auction_count(env: Env) -> Result<u64, Error> {
        Ok(registry::load_registry(&env)?.auction_count)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        Ok(registry::load_registry(&env)?.owner)
    }

    fn currency(env: Env) -> Result<Address, Error> {
        Ok(registry::load_registry(&env)?.currency)
    }

    fn default_duration(env: Env) -> Result<u64, Error> {
        Ok(registry::load_registry(&env)?.default_duration)
    }

    fn fee(env: Env) -> Result<i128, Error> {
        Ok(registry::load_registry(&env)?.fee)
    }

    fn accrued_fees(env: Env) -> Result<i128, Error> {
        Ok(registry::load_registry(&env)?.accrued_fees)
    }

    fn withdraw_fees(env: Env, to: Address) -> Result<i128, Error> {
        settlement::withdraw_fees(&env, &to)
    }

    fn version(env: Env) -> Vec<u32> {
        vec![&env, 0, 1, 0] // "0.1.0"
    }
}
