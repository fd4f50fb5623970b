/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{log, Address, Env, String};

use super::behavior::BaseAuction;
use super::behavior_descending_price::DescendingPriceAuction;
use crate::errors::Error;
use crate::events::AuctionEvents;
use crate::math::SafeMath;
use crate::types::{AuctionData, DataKey, RegistryData};
use crate::validate;

pub mod ledger_times {
    // Assuming 6 seconds average time per ledger.
    pub const LEDGERS_PER_MINUTE: u64 = 10;
    pub const LEDGERS_PER_HOUR: u64 = LEDGERS_PER_MINUTE * 60;
    pub const LEDGERS_PER_DAY: u64 = LEDGERS_PER_HOUR * 24;
    pub const LEDGERS_PER_YEAR: u64 = LEDGERS_PER_DAY * 365;
}

// Keep records readable for a while after expiry.
const EXPIRATION_BUFFER: u64 = 7200;

fn convert_seconds_to_ledgers(seconds: u64) -> u32 {
    seconds
        .div_ceil(60 / ledger_times::LEDGERS_PER_MINUTE)
        .min(ledger_times::LEDGERS_PER_YEAR) as u32
}

// Keeps the contract instance (registry included) alive for `seconds` plus the buffer.
fn extend_instance_ttl(env: &Env, seconds: u64) {
    let ttl = convert_seconds_to_ledgers(seconds.saturating_add(EXPIRATION_BUFFER));
    env.storage().instance().extend_ttl(ttl, ttl);
}

pub fn initialize(
    env: &Env,
    owner: &Address,
    currency: &Address,
    default_duration: u64,
    fee: i128,
) -> Result<(), Error> {
    validate!(
        env,
        !storage::has::<DataKey, RegistryData>(env, &DataKey::Registry),
        Error::AlreadyInitialized
    )?;
    validate!(
        env,
        default_duration > 0 && (0..=100).contains(&fee),
        Error::InvalidSettings
    )?;

    let registry = RegistryData {
        owner: owner.clone(),
        currency: currency.clone(),
        default_duration,
        fee,
        auction_count: 0,
        accrued_fees: 0,
    };
    save_registry(env, &registry);
    AuctionEvents::initialized(env, owner);
    Ok(())
}

pub fn load_registry(env: &Env) -> Result<RegistryData, Error> {
    match storage::get::<DataKey, RegistryData>(env, &DataKey::Registry) {
        Some(registry) => Ok(registry),
        None => {
            log!(env, "Registry not initialized");
            Err(Error::NotInitialized)
        }
    }
}

pub fn save_registry(env: &Env, registry: &RegistryData) {
    storage::set::<DataKey, RegistryData>(env, &DataKey::Registry, registry);
    extend_instance_ttl(env, registry.default_duration);
}

pub fn load_auction(env: &Env, auction_id: u64) -> Result<AuctionData, Error> {
    let registry = load_registry(env)?;
    validate!(env, auction_id < registry.auction_count, Error::NotFound)?;
    match storage::get::<DataKey, AuctionData>(env, &DataKey::Auction(auction_id)) {
        Some(auction_data) => Ok(auction_data),
        None => {
            log!(env, "Auction {} missing from storage", auction_id);
            Err(Error::NotFound)
        }
    }
}

// Every write keeps the record alive until `ends_at` plus the buffer.
pub fn save_auction(env: &Env, auction_id: u64, auction_data: &AuctionData) {
    let key = DataKey::Auction(auction_id);
    storage::set::<DataKey, AuctionData>(env, &key, auction_data);
    let remaining = auction_data
        .ends_at
        .saturating_sub(env.ledger().timestamp());
    let ttl = convert_seconds_to_ledgers(remaining.saturating_add(EXPIRATION_BUFFER));
    env.storage().persistent().extend_ttl(&key, ttl, ttl);
}

pub fn create(
    env: &Env,
    seller: &Address,
    starting_price: i128,
    discount_rate: i128,
    item: &String,
    duration: u64,
) -> Result<u64, Error> {
    let mut registry = load_registry(env)?;

    let duration = if duration == 0 {
        registry.default_duration
    } else {
        duration
    };

    validate!(
        env,
        starting_price >= 0 && discount_rate >= 0,
        Error::InvalidPricing
    )?;
    let total_discount = discount_rate.safe_mul(duration as i128, env)?;
    validate!(env, starting_price >= total_discount, Error::InvalidPricing)?;

    let start_at = env.ledger().timestamp();
    let ends_at = start_at.safe_add(duration, env)?;

    let auction_id = registry.auction_count;
    registry.auction_count = auction_id.safe_add(1, env)?;

    let auction_data = AuctionData::new(
        seller.clone(),
        starting_price,
        discount_rate,
        item.clone(),
        start_at,
        ends_at,
    );
    save_auction(env, auction_id, &auction_data);
    save_registry(env, &registry);
    // The registry must outlive every auction it indexes.
    extend_instance_ttl(env, duration);

    log!(env, "Auction {} created, ends at {}", auction_id, ends_at);
    AuctionEvents::created(env, auction_id, item, starting_price, duration);
    Ok(auction_id)
}

pub fn price_for(env: &Env, auction_id: u64) -> Result<i128, Error> {
    let auction_data = load_auction(env, auction_id)?;
    validate!(env, !auction_data.stopped, Error::AlreadyStopped)?;
    DescendingPriceAuction.calculate_price(env, &auction_data, env.ledger().timestamp())
}

#[cfg(test)]
mod tests {
    use super::ledger_times::LEDGERS_PER_YEAR;
    use super::*;

    #[test]
    fn test_seconds_to_ledgers_rounds_up() {
        assert_eq!(convert_seconds_to_ledgers(0), 0);
        assert_eq!(convert_seconds_to_ledgers(1), 1);
        assert_eq!(convert_seconds_to_ledgers(6), 1);
        assert_eq!(convert_seconds_to_ledgers(7), 2);
        assert_eq!(convert_seconds_to_ledgers(60), 10);
    }

    #[test]
    fn test_seconds_to_ledgers_covers_default_lifetime() {
        // 2 days plus the buffer at 6 seconds per ledger.
        assert_eq!(
            convert_seconds_to_ledgers(crate::DEFAULT_DURATION + EXPIRATION_BUFFER),
            30_000
        );
    }

    #[test]
    fn test_seconds_to_ledgers_is_capped() {
        assert_eq!(convert_seconds_to_ledgers(u64::MAX), LEDGERS_PER_YEAR as u32);
    }
}
