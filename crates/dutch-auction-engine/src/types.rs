/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::{key_constraint, soroban_tools, storage};
use soroban_sdk::{contracttype, Address, Env, String};

#[derive(Clone)]
#[contracttype]
#[key_constraint(DataKeyConstraint)]
pub enum DataKey {
    Registry,
    Auction(u64),
}

/// Deployment settings and the append-only sequence bookkeeping.
#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryData {
    pub owner: Address,
    pub currency: Address,
    pub default_duration: u64,
    pub fee: i128,
    pub auction_count: u64,
    pub accrued_fees: i128,
}

#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionData {
    pub seller: Address,
    pub starting_price: i128,
    pub final_price: i128,
    pub start_at: u64,
    pub ends_at: u64,
    pub discount_rate: i128,
    pub item: String,
    pub stopped: bool,
}

impl AuctionData {
    pub fn new(
        seller: Address,
        starting_price: i128,
        discount_rate: i128,
        item: String,
        start_at: u64,
        ends_at: u64,
    ) -> Self {
        AuctionData {
            seller,
            starting_price,
            final_price: starting_price,
            start_at,
            ends_at,
            discount_rate,
            item,
            stopped: false,
        }
    }
}

/// Outcome of a successful purchase.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    pub auction_id: u64,
    pub price: i128,
    pub fee: i128,
    pub proceeds: i128,
    pub refund: i128,
}
