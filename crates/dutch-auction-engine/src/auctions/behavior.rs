/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{log, Address, Env};

use super::registry::{load_auction, load_registry, save_auction, save_registry};
use super::settlement::settle;
use crate::errors::Error;
use crate::events::AuctionEvents;
use crate::types::{AuctionData, Receipt};
use crate::validate;

pub trait BaseAuction {
    // Validation order is fixed: existence, stopped, expiry, funds.
    fn buy(
        &self,
        env: &Env,
        buyer: &Address,
        auction_id: u64,
        tendered_amount: i128,
    ) -> Result<Receipt, Error> {
        let mut registry = load_registry(env)?;
        let mut auction_data = load_auction(env, auction_id)?;
        validate!(env, !auction_data.stopped, Error::AlreadyStopped)?;

        let now = env.ledger().timestamp();
        validate!(env, now < auction_data.ends_at, Error::Expired)?;

        let price = self.calculate_price(env, &auction_data, now)?;
        validate!(env, tendered_amount >= price, Error::InsufficientFunds)?;

        // Staged: nothing is written back until every transfer went through.
        auction_data.stopped = true;
        auction_data.final_price = price;
        let receipt = settle(
            env,
            &mut registry,
            auction_id,
            &auction_data.seller,
            buyer,
            price,
            tendered_amount,
        )?;

        save_auction(env, auction_id, &auction_data);
        save_registry(env, &registry);

        log!(env, "Auction {} sold for {}", auction_id, price);
        if receipt.refund > 0 {
            AuctionEvents::refund(env, auction_id, receipt.refund, buyer);
        }
        AuctionEvents::ended(env, auction_id, price, buyer);
        Ok(receipt)
    }

    fn stop(&self, env: &Env, caller: &Address, auction_id: u64) -> Result<(), Error> {
        let mut auction_data = load_auction(env, auction_id)?;
        validate!(env, *caller == auction_data.seller, Error::AccessDenied)?;
        validate!(env, !auction_data.stopped, Error::AlreadyStopped)?;

        auction_data.stopped = true;
        save_auction(env, auction_id, &auction_data);

        log!(env, "Auction {} stopped by seller", auction_id);
        AuctionEvents::stopped(env, auction_id);
        Ok(())
    }

    fn calculate_price(&self, env: &Env, auction_data: &AuctionData, now: u64) -> Result<i128, Error>;
}
