// This file is part of curve-router.

// Copyright (C) 2020-2022  Intergalactic, Limited (GIB).
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Curve router
//!
//! Routes a trade through two-asset curve pools.
//!
//! For an incoming asset and a requested output symbol, the router enumerates every route of
//! one or two pools connecting the two assets, quotes each of them without touching any state
//! and picks the route with the largest output. The chosen route is then executed for real:
//! pool reserves, volumes and prices are updated and the output is transferred to the receiver.
//!
//! A real execution is atomic. All pool updates are staged first and written to the registry
//! only after the settlement transfer succeeds, so a failure at any step leaves the pools
//! exactly as they were.
//!
//! ### Terminology
//!
//! - **Path:** ordered list of pool ids. Each hop consumes the output of the previous one.
//! - **Dry run:** quote of a path. Pools whose reserve issuer does not match the incoming asset
//!   are tolerated and reported as a mismatch.
//! - **Finalize:** strict execution of a path which mutates the pools.

#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt::Debug;

use curve_math::MathError;
use curve_traits::{PoolRegistry, TimestampProvider, Transfer};

pub mod path;
pub mod registry;
pub mod trade;
pub mod types;

#[cfg(test)]
mod tests;

pub use path::{find_pair_id, find_trade_paths};
pub use registry::{MemoryRegistry, RegistryError};
pub use trade::Router;
pub use types::{MinOutput, Path, TradeOutcome};

pub const LOG_TARGET: &str = "runtime::curve";

pub trait Config {
	/// Identifier of token issuers, the router account and receivers.
	type AccountId: Clone + Eq + Ord + Debug;

	/// Pool storage.
	type Registry: PoolRegistry<Self::AccountId>;

	/// Settlement of trade outputs.
	type Currency: Transfer<Self::AccountId>;

	/// Timestamp stored in updated pools.
	type TimestampProvider: TimestampProvider;

	/// Precision all amounts are scaled to before prices are computed.
	const MAX_PRECISION: u8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
	/// Invalid trade input or pool parameters.
	InvalidInput,
	/// Arithmetic overflow.
	Overflow,
	/// No pool or pair of pools connects the two assets.
	NoPath,
	/// Every candidate path was rejected.
	NoMatchingExchange,
	/// Best output is below the requested minimum.
	ReturnTooLow,
	/// Best output issuer or precision differs from the requested one.
	ContractMismatch,
	/// Pool does not hold enough of the output asset.
	InsufficientReserve,
	/// Trade path has no hops.
	EmptyPath,
	/// Pool is not present in the registry.
	PoolNotFound,
	/// Incoming asset does not match the pool reserve it is traded against.
	ReserveMismatch,
	/// Settlement transfer was rejected.
	TransferFailed,
}

impl From<MathError> for Error {
	fn from(value: MathError) -> Self {
		match value {
			MathError::ZeroAmount
			| MathError::ZeroAmplification
			| MathError::ZeroReserve
			| MathError::ReserveOutOfBounds
			| MathError::InvalidFee => Error::InvalidInput,
			MathError::Overflow | MathError::DivisionByZero => Error::Overflow,
			MathError::InsufficientOutReserve => Error::InsufficientReserve,
		}
	}
}
