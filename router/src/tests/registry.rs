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

use crate::tests::mock::*;
use crate::{MemoryRegistry, RegistryError};
use curve_traits::{ExtendedAsset, ExtendedSymbol, PoolInfo, PoolRegistry, Symbol};
use pretty_assertions::assert_eq;

fn pool_info(
	id: &str,
	reserve0: ExtendedAsset<AccountId>,
	reserve1: ExtendedAsset<AccountId>,
) -> PoolInfo<AccountId> {
	let liquidity = asset(0, ExtendedSymbol::new(Symbol::new(code(id), MAX_PRECISION), ROUTER));
	PoolInfo::new(code(id), reserve0, reserve1, liquidity, 100, 4, 0)
}

#[test]
fn insert_should_fail_when_pool_id_exists() {
	let mut registry = MemoryRegistry::<AccountId>::new();

	assert_eq!(registry.insert(pool_info("LPA", asset(1, usdt()), asset(1, usdc()))), Ok(()));
	assert_eq!(
		registry.insert(pool_info("LPA", asset(1, usdt()), asset(1, dai()))),
		Err(RegistryError::PoolExists)
	);
	assert_eq!(registry.len(), 1);
}

#[test]
fn insert_should_fail_when_pair_exists_in_any_order() {
	let mut registry = MemoryRegistry::<AccountId>::new();

	assert_eq!(registry.insert(pool_info("LPA", asset(1, usdt()), asset(1, usdc()))), Ok(()));
	assert_eq!(
		registry.insert(pool_info("LPB", asset(1, usdc()), asset(1, fake_usdt()))),
		Err(RegistryError::PairExists)
	);
	assert_eq!(registry.get(code("LPB")), None);
}

#[test]
fn insert_should_fail_when_reserves_share_symbol_code() {
	let mut registry = MemoryRegistry::<AccountId>::new();

	assert_eq!(
		registry.insert(pool_info("LPA", asset(1, usdt()), asset(1, fake_usdt()))),
		Err(RegistryError::IdenticalAssets)
	);
	assert!(registry.is_empty());
}

#[test]
fn pools_should_be_ordered_by_id() {
	let mut registry = MemoryRegistry::<AccountId>::new();
	registry.insert(pool_info("LPC", asset(1, usdc()), asset(1, dai()))).unwrap();
	registry.insert(pool_info("LPA", asset(1, usdt()), asset(1, usdc()))).unwrap();
	registry.insert(pool_info("LPB", asset(1, usdt()), asset(1, dai()))).unwrap();

	let ids: Vec<_> = registry.pools().into_iter().map(|pool| pool.id).collect();

	assert_eq!(ids, path(&["LPA", "LPB", "LPC"]));
}

#[test]
fn get_by_pair_should_ignore_order() {
	let mut registry = MemoryRegistry::<AccountId>::new();
	let pool = pool_info("LPA", asset(1, usdt()), asset(1, usdc()));
	registry.insert(pool.clone()).unwrap();

	assert_eq!(registry.get_by_pair(code("USDT"), code("USDC")), Some(pool.clone()));
	assert_eq!(registry.get_by_pair(code("USDC"), code("USDT")), Some(pool));
	assert_eq!(registry.get_by_pair(code("USDC"), code("DAI")), None);
}

#[test]
fn modify_should_update_stored_pool() {
	let mut registry = MemoryRegistry::<AccountId>::new();
	registry.insert(pool_info("LPA", asset(1, usdt()), asset(1, usdc()))).unwrap();

	assert_eq!(registry.modify(code("LPA"), |pool| pool.last_updated = 42), Some(()));
	assert_eq!(registry.get(code("LPA")).unwrap().last_updated, 42);
	assert_eq!(registry.modify(code("LPB"), |pool| pool.last_updated = 42), None);
}
