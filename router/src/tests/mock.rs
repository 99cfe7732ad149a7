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

use crate::{Config, MemoryRegistry, Router};
use curve_math::price::normalize;
use curve_traits::{
	Balance, ExtendedAsset, ExtendedSymbol, Moment, PoolInfo, PoolRegistry, Symbol, SymbolCode, TimestampProvider,
	Transfer,
};
use std::cell::RefCell;

pub type AccountId = u64;

pub const ROUTER: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;

pub const TETHER: AccountId = 100;
pub const CIRCLE: AccountId = 101;
pub const MAKER: AccountId = 102;
pub const NEAR: AccountId = 103;
pub const BRIDGE: AccountId = 104;
pub const LIDO: AccountId = 105;
pub const FAKE: AccountId = 666;

pub const MAX_PRECISION: u8 = 9;
pub const GENESIS: Moment = 1_600_000_000;

thread_local! {
	pub static NOW: RefCell<Moment> = RefCell::new(GENESIS);
}

pub struct Test;

impl Config for Test {
	type AccountId = AccountId;
	type Registry = MemoryRegistry<AccountId>;
	type Currency = MockCurrency;
	type TimestampProvider = MockTimestamp;
	const MAX_PRECISION: u8 = MAX_PRECISION;
}

pub struct MockTimestamp;

impl TimestampProvider for MockTimestamp {
	fn now() -> Moment {
		NOW.with(|v| *v.borrow())
	}
}

pub fn set_now(now: Moment) {
	NOW.with(|v| {
		*v.borrow_mut() = now;
	});
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
	pub from: AccountId,
	pub to: AccountId,
	pub value: ExtendedAsset<AccountId>,
	pub memo: String,
}

#[derive(Default)]
pub struct MockCurrency {
	pub transfers: Vec<TransferRecord>,
	pub fail: bool,
}

impl Transfer<AccountId> for MockCurrency {
	type Error = ();

	fn transfer(
		&mut self,
		from: &AccountId,
		to: &AccountId,
		value: &ExtendedAsset<AccountId>,
		memo: &str,
	) -> Result<(), Self::Error> {
		if self.fail {
			return Err(());
		}
		self.transfers.push(TransferRecord {
			from: *from,
			to: *to,
			value: value.clone(),
			memo: memo.to_string(),
		});
		Ok(())
	}
}

pub fn code(value: &str) -> SymbolCode {
	SymbolCode::new(value).unwrap()
}

fn extended_symbol(value: &str, precision: u8, issuer: AccountId) -> ExtendedSymbol<AccountId> {
	ExtendedSymbol::new(Symbol::new(code(value), precision), issuer)
}

pub fn usdt() -> ExtendedSymbol<AccountId> {
	extended_symbol("USDT", 4, TETHER)
}

pub fn usdc() -> ExtendedSymbol<AccountId> {
	extended_symbol("USDC", 4, CIRCLE)
}

pub fn dai() -> ExtendedSymbol<AccountId> {
	extended_symbol("DAI", 4, MAKER)
}

pub fn usn() -> ExtendedSymbol<AccountId> {
	extended_symbol("USN", 4, NEAR)
}

pub fn usdd() -> ExtendedSymbol<AccountId> {
	extended_symbol("USDD", 6, MAKER)
}

pub fn weth() -> ExtendedSymbol<AccountId> {
	extended_symbol("WETH", 18, BRIDGE)
}

pub fn steth() -> ExtendedSymbol<AccountId> {
	extended_symbol("STETH", 18, LIDO)
}

pub fn fake_usdt() -> ExtendedSymbol<AccountId> {
	extended_symbol("USDT", 4, FAKE)
}

pub fn fake_dai() -> ExtendedSymbol<AccountId> {
	extended_symbol("DAI", 4, FAKE)
}

pub fn asset(amount: Balance, symbol: ExtendedSymbol<AccountId>) -> ExtendedAsset<AccountId> {
	ExtendedAsset::new(amount, &symbol)
}

pub fn pool(router: &Router<Test>, id: &str) -> PoolInfo<AccountId> {
	router.registry().get(code(id)).unwrap()
}

pub fn path(ids: &[&str]) -> Vec<SymbolCode> {
	ids.iter().map(|id| code(id)).collect()
}

pub struct ExtBuilder {
	pools: Vec<PoolInfo<AccountId>>,
	failing_transfers: bool,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		// thread local is shared when tests run on one thread
		set_now(GENESIS);

		Self {
			pools: vec![],
			failing_transfers: false,
		}
	}
}

impl ExtBuilder {
	/// Pool whose liquidity supply equals the normalized sum of its reserves.
	pub fn with_pool(
		mut self,
		id: &str,
		reserve0: ExtendedAsset<AccountId>,
		reserve1: ExtendedAsset<AccountId>,
		amplifier: u64,
		fee: u32,
	) -> Self {
		let supply = normalize(reserve0.amount(), reserve0.quantity.symbol.precision, MAX_PRECISION).unwrap()
			+ normalize(reserve1.amount(), reserve1.quantity.symbol.precision, MAX_PRECISION).unwrap();
		let liquidity = asset(supply, extended_symbol(id, MAX_PRECISION, ROUTER));

		self.pools.push(PoolInfo::new(
			code(id),
			reserve0,
			reserve1,
			liquidity,
			amplifier,
			fee,
			0,
		));
		self
	}

	pub fn with_failing_transfers(mut self) -> Self {
		self.failing_transfers = true;
		self
	}

	pub fn build(self) -> Router<Test> {
		let mut registry = MemoryRegistry::new();
		for pool in self.pools {
			registry.insert(pool).unwrap();
		}

		Router::new(
			ROUTER,
			registry,
			MockCurrency {
				transfers: vec![],
				fail: self.failing_transfers,
			},
		)
	}
}
