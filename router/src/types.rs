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

use crate::Error;
use codec::{Decode, Encode, MaxEncodedLen};
use curve_math::ensure;
use curve_traits::{Asset, Balance, ExtendedAsset, Symbol, SymbolCode};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

/// Pool ids in execution order.
pub type Path = Vec<SymbolCode>;

/// Result of executing a path.
#[derive(Encode, Decode, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub enum TradeOutcome<AccountId> {
	/// Every hop matched, carries the output of the last hop.
	Matched(ExtendedAsset<AccountId>),
	/// A dry run reached a pool whose reserve does not match the incoming asset.
	Mismatched { pool_id: SymbolCode },
}

/// Constraints on the output of a conversion.
///
/// An unset `issuer` or `symbol` accepts any. `symbol` and `amount` are only checked when
/// `amount` is non-zero.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub struct MinOutput<AccountId> {
	pub amount: Balance,
	pub symbol: Option<Symbol>,
	pub issuer: Option<AccountId>,
}

impl<AccountId: PartialEq> MinOutput<AccountId> {
	/// Accepts any output.
	pub fn any() -> Self {
		Self {
			amount: 0,
			symbol: None,
			issuer: None,
		}
	}

	/// At least `asset.amount` of `asset.symbol`.
	pub fn at_least(asset: Asset) -> Self {
		Self {
			amount: asset.amount,
			symbol: Some(asset.symbol),
			issuer: None,
		}
	}

	pub fn with_issuer(mut self, issuer: AccountId) -> Self {
		self.issuer = Some(issuer);
		self
	}

	pub fn validate(&self, output: &ExtendedAsset<AccountId>) -> Result<(), Error> {
		if let Some(issuer) = &self.issuer {
			ensure!(*issuer == output.issuer, Error::ContractMismatch);
		}

		if self.amount > 0 {
			if let Some(symbol) = self.symbol {
				ensure!(symbol == output.quantity.symbol, Error::ContractMismatch);
			}
			ensure!(output.quantity.amount >= self.amount, Error::ReturnTooLow);
		}

		Ok(())
	}
}
