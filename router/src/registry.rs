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

use curve_math::ensure;
use curve_traits::{PoolInfo, PoolRegistry, SymbolCode};
use sp_std::collections::btree_map::BTreeMap;
use sp_std::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
	/// Pool with the same id is already registered.
	PoolExists,
	/// Another pool already connects the same two symbol codes.
	PairExists,
	/// Both reserves have the same symbol code.
	IdenticalAssets,
}

/// In-memory pool storage with a secondary index on the unordered pair of reserve codes.
#[derive(Clone, Debug)]
pub struct MemoryRegistry<AccountId> {
	pools: BTreeMap<SymbolCode, PoolInfo<AccountId>>,
	pairs: BTreeMap<(SymbolCode, SymbolCode), SymbolCode>,
}

impl<AccountId> Default for MemoryRegistry<AccountId> {
	fn default() -> Self {
		Self {
			pools: BTreeMap::new(),
			pairs: BTreeMap::new(),
		}
	}
}

fn pair_key(code_a: SymbolCode, code_b: SymbolCode) -> (SymbolCode, SymbolCode) {
	if code_a <= code_b {
		(code_a, code_b)
	} else {
		(code_b, code_a)
	}
}

impl<AccountId: Clone + PartialEq> MemoryRegistry<AccountId> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, pool: PoolInfo<AccountId>) -> Result<(), RegistryError> {
		let (code0, code1) = pool.symbol_codes();
		ensure!(code0 != code1, RegistryError::IdenticalAssets);
		ensure!(!self.pools.contains_key(&pool.id), RegistryError::PoolExists);

		let key = pair_key(code0, code1);
		ensure!(!self.pairs.contains_key(&key), RegistryError::PairExists);

		self.pairs.insert(key, pool.id);
		self.pools.insert(pool.id, pool);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.pools.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pools.is_empty()
	}
}

impl<AccountId: Clone + PartialEq> PoolRegistry<AccountId> for MemoryRegistry<AccountId> {
	fn get(&self, pool_id: SymbolCode) -> Option<PoolInfo<AccountId>> {
		self.pools.get(&pool_id).cloned()
	}

	fn get_by_pair(&self, code_a: SymbolCode, code_b: SymbolCode) -> Option<PoolInfo<AccountId>> {
		self.pairs
			.get(&pair_key(code_a, code_b))
			.and_then(|pool_id| self.pools.get(pool_id))
			.cloned()
	}

	fn pools(&self) -> Vec<PoolInfo<AccountId>> {
		self.pools.values().cloned().collect()
	}

	fn modify<R, F>(&mut self, pool_id: SymbolCode, f: F) -> Option<R>
	where
		F: FnOnce(&mut PoolInfo<AccountId>) -> R,
	{
		self.pools.get_mut(&pool_id).map(f)
	}
}
