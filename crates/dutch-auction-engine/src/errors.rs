/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Starting price cannot cover the discount over the whole duration.
    InvalidPricing = 1,
    NotFound = 2,
    AlreadyStopped = 3,
    Expired = 4,
    InsufficientFunds = 5,
    AccessDenied = 6,
    TransferFailed = 7,
    ArithmeticOverflow = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
    InvalidSettings = 11,
}

// Logs the error code and call site before failing the operation.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {{
        if $assert {
            Ok(())
        } else {
            let error: $crate::errors::Error = $err;
            soroban_sdk::log!($env, "Error {} thrown at line {}", error as u32, line!());
            Err(error)
        }
    }};
}
