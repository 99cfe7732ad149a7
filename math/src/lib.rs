//! # Curve Math
//!
//! StableSwap invariant solver and the derived price metrics of a
//! two-asset curve pool.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), test))]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod curve;
pub mod price;
pub mod types;

#[macro_export]
macro_rules! ensure {
	($e:expr, $f:expr) => {
		match $e {
			true => (),
			false => {
				return Err($f);
			}
		}
	};
}

#[macro_export]
macro_rules! to_u256 {
    ($($x:expr),+) => (
        {($(U256::from($x)),+)}
    );
}

#[macro_export]
macro_rules! to_balance {
	($x:expr) => {
		Balance::try_from($x).map_err(|_| Overflow)
	};
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum MathError {
	Overflow,
	InsufficientOutReserve,
	ZeroAmount,
	ZeroAmplification,
	ZeroReserve,
	ReserveOutOfBounds,
	InvalidFee,
	DivisionByZero,
}
