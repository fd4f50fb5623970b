/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use crate::errors::Error;
use crate::math::SafeMath;
use crate::types::AuctionData;
use crate::validate;
use soroban_sdk::Env;

pub struct DescendingPriceAuction;

// DescendingPriceAuction (aka Dutch Auction).
impl super::behavior::BaseAuction for DescendingPriceAuction {
    fn calculate_price(&self, env: &Env, auction_data: &AuctionData, now: u64) -> Result<i128, Error> {
        let elapsed = now.safe_sub(auction_data.start_at, env)?;

        // Apply simple linear discount.
        let price = auction_data
            .starting_price
            .safe_sub(auction_data.discount_rate.safe_mul(elapsed as i128, env)?, env)?;

        // Only reachable past `ends_at`, creation guarantees a non-negative price until then.
        validate!(env, price >= 0, Error::ArithmeticOverflow)?;
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auctions::behavior::BaseAuction;
    use soroban_sdk::{testutils::Address as _, Address, String};

    fn auction(env: &Env) -> AuctionData {
        AuctionData::new(
            Address::generate(env),
            1_000,
            3,
            String::from_str(env, "fake item"),
            100,
            160,
        )
    }

    #[test]
    fn test_price_starts_at_starting_price() {
        let env = Env::default();
        let auction_data = auction(&env);
        assert_eq!(
            DescendingPriceAuction.calculate_price(&env, &auction_data, 100),
            Ok(1_000)
        );
    }

    #[test]
    fn test_price_decays_linearly() {
        let env = Env::default();
        let auction_data = auction(&env);
        let mut last = i128::MAX;
        for now in 100..=160u64 {
            let price = DescendingPriceAuction
                .calculate_price(&env, &auction_data, now)
                .unwrap();
            assert_eq!(price, 1_000 - 3 * (now - 100) as i128);
            assert!(price <= last);
            last = price;
        }
    }

    #[test]
    fn test_price_before_start_is_rejected() {
        let env = Env::default();
        let auction_data = auction(&env);
        assert_eq!(
            DescendingPriceAuction.calculate_price(&env, &auction_data, 99),
            Err(Error::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_price_below_zero_is_rejected() {
        let env = Env::default();
        let auction_data = auction(&env);
        // 1_000 - 3 * 334 < 0
        assert_eq!(
            DescendingPriceAuction.calculate_price(&env, &auction_data, 434),
            Err(Error::ArithmeticOverflow)
        );
    }
}
