// This file is part of curve-traits.

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

#![cfg_attr(not(feature = "std"), no_std)]

pub mod asset;
pub mod pool;
pub mod registry;

pub use asset::*;
pub use pool::*;
pub use registry::*;

pub use curve_math::types::{Balance, Price};

/// Type used for expressing timestamp.
pub type Moment = u64;

/// Settlement of assets leaving the pools.
///
/// The transfer is expected to commit or abort together with the trade that requested it.
pub trait Transfer<AccountId> {
	type Error;

	fn transfer(
		&mut self,
		from: &AccountId,
		to: &AccountId,
		value: &ExtendedAsset<AccountId>,
		memo: &str,
	) -> Result<(), Self::Error>;
}

/// Provides current time used to stamp pool updates.
pub trait TimestampProvider {
	fn now() -> Moment;
}
