/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

// Event topics.
pub const AUCTION: Symbol = symbol_short!("AUCTION");
pub const FEES: Symbol = symbol_short!("FEES");

pub struct AuctionEvents;

impl AuctionEvents {
    /// - topics - `["AUCTION", "init", owner: Address]`
    /// - data - `()`
    pub fn initialized(env: &Env, owner: &Address) {
        env.events()
            .publish((AUCTION, symbol_short!("init"), owner.clone()), ());
    }

    /// - topics - `["AUCTION", "created"]`
    /// - data - `[auction_id: u64, item: String, starting_price: i128, duration: u64]`
    pub fn created(
        env: &Env,
        auction_id: u64,
        item: &String,
        starting_price: i128,
        duration: u64,
    ) {
        env.events().publish(
            (AUCTION, symbol_short!("created")),
            (auction_id, item.clone(), starting_price, duration),
        );
    }

    /// Emitted only when the buyer tendered more than the price.
    ///
    /// - topics - `["AUCTION", "refund"]`
    /// - data - `[auction_id: u64, overpayment: i128, buyer: Address]`
    pub fn refund(env: &Env, auction_id: u64, overpayment: i128, buyer: &Address) {
        env.events().publish(
            (AUCTION, symbol_short!("refund")),
            (auction_id, overpayment, buyer.clone()),
        );
    }

    /// - topics - `["AUCTION", "ended"]`
    /// - data - `[auction_id: u64, price: i128, buyer: Address]`
    pub fn ended(env: &Env, auction_id: u64, price: i128, buyer: &Address) {
        env.events().publish(
            (AUCTION, symbol_short!("ended")),
            (auction_id, price, buyer.clone()),
        );
    }

    /// - topics - `["AUCTION", "stopped"]`
    /// - data - `auction_id: u64`
    pub fn stopped(env: &Env, auction_id: u64) {
        env.events()
            .publish((AUCTION, symbol_short!("stopped")), auction_id);
    }

    /// - topics - `["FEES", "withdrawn"]`
    /// - data - `[to: Address, amount: i128]`
    pub fn fees_withdrawn(env: &Env, to: &Address, amount: i128) {
        env.events()
            .publish((FEES, symbol_short!("withdrawn")), (to.clone(), amount));
    }
}
