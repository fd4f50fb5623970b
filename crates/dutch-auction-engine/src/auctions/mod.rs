/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! The `auctions` module implements a registry of independent, time-bounded
//! descending price auctions.
//!
//! - `registry`: append-only auction records and deployment settings.
//! - `behavior`: the `buy` and `stop` transitions (Active -> Stopped).
//! - `behavior_descending_price`: linear price decay computed on demand.
//! - `settlement`: fee split, proceeds, refund of overpayment and fee withdrawal.

pub mod behavior;
pub mod behavior_descending_price;
pub mod registry;
pub mod settlement;
