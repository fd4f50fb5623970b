/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use core::panic::Location;
use soroban_sdk::{log, Env};

use crate::errors::Error;

/// Checked arithmetic reporting overflow as `Error::ArithmeticOverflow`.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> Result<Self, Error>;
    fn safe_sub(self, rhs: Self, env: &Env) -> Result<Self, Error>;
    fn safe_mul(self, rhs: Self, env: &Env) -> Result<Self, Error>;
    fn safe_div(self, rhs: Self, env: &Env) -> Result<Self, Error>;
}

#[track_caller]
fn overflow<T>(env: &Env) -> Result<T, Error> {
    log!(env, "Math error thrown at line {}", Location::caller().line());
    Err(Error::ArithmeticOverflow)
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> Result<$t, Error> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => overflow(env),
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> Result<$t, Error> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => overflow(env),
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> Result<$t, Error> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => overflow(env),
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> Result<$t, Error> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => overflow(env),
                }
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(i128);
