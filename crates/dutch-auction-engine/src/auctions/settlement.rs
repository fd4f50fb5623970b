/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{log, token, Address, Env};

use super::registry::{load_registry, save_registry};
use crate::errors::Error;
use crate::events::AuctionEvents;
use crate::math::SafeMath;
use crate::types::{Receipt, RegistryData};

fn transfer(
    env: &Env,
    currency: &token::Client,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match currency.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Transfer of {} to {} rejected", amount, to.clone());
            Err(Error::TransferFailed)
        }
    }
}

/// Collects the tendered amount from the buyer, pays the seller their share of `price`
/// and refunds the overpayment. The withheld fee accrues on `registry`.
pub fn settle(
    env: &Env,
    registry: &mut RegistryData,
    auction_id: u64,
    seller: &Address,
    buyer: &Address,
    price: i128,
    tendered_amount: i128,
) -> Result<Receipt, Error> {
    let currency = token::Client::new(env, &registry.currency);
    let contract = env.current_contract_address();

    let fee = price.safe_mul(registry.fee, env)?.safe_div(100, env)?;
    let proceeds = price.safe_sub(fee, env)?;
    let refund = tendered_amount.safe_sub(price, env)?;

    transfer(env, &currency, buyer, &contract, tendered_amount)?;
    transfer(env, &currency, &contract, seller, proceeds)?;
    if refund > 0 {
        transfer(env, &currency, &contract, buyer, refund)?;
    }

    registry.accrued_fees = registry.accrued_fees.safe_add(fee, env)?;

    Ok(Receipt {
        auction_id,
        price,
        fee,
        proceeds,
        refund,
    })
}

/// Pays every accrued fee to `to`. Owner authorization required.
pub fn withdraw_fees(env: &Env, to: &Address) -> Result<i128, Error> {
    let mut registry = load_registry(env)?;
    registry.owner.require_auth();

    let amount = registry.accrued_fees;
    if amount == 0 {
        return Ok(0);
    }

    let currency = token::Client::new(env, &registry.currency);
    transfer(env, &currency, &env.current_contract_address(), to, amount)?;

    registry.accrued_fees = 0;
    save_registry(env, &registry);
    AuctionEvents::fees_withdrawn(env, to, amount);
    Ok(amount)
}
