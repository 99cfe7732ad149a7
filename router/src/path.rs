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

use crate::types::Path;
use crate::Error;
use curve_math::ensure;
use curve_traits::{PoolRegistry, SymbolCode};
use sp_std::vec;
use sp_std::vec::Vec;

/// Id of the pool connecting the two codes, in either order.
pub fn find_pair_id<AccountId, R>(registry: &R, code_a: SymbolCode, code_b: SymbolCode) -> Option<SymbolCode>
where
	R: PoolRegistry<AccountId>,
{
	registry.get_by_pair(code_a, code_b).map(|pool| pool.id)
}

/// All paths of at most two pools leading from `code_in` to `code_out`.
///
/// Direct paths come first, two-hop paths follow in the order their first pool appears in the
/// registry. Issuers are not considered here, a path may still be rejected when executed.
pub fn find_trade_paths<AccountId, R>(registry: &R, code_in: SymbolCode, code_out: SymbolCode) -> Result<Vec<Path>, Error>
where
	AccountId: Clone + PartialEq,
	R: PoolRegistry<AccountId>,
{
	ensure!(code_in != code_out, Error::InvalidInput);

	let mut paths: Vec<Path> = Vec::new();
	let mut first_hops: Vec<(SymbolCode, SymbolCode)> = Vec::new();

	for pool in registry.pools() {
		let intermediate = match pool.counterpart(code_in) {
			Some(code) => code,
			None => continue,
		};

		if intermediate == code_out {
			paths.push(vec![pool.id]);
		} else {
			first_hops.push((pool.id, intermediate));
		}
	}

	for (pool_id, intermediate) in first_hops {
		if let Some(second) = find_pair_id(registry, intermediate, code_out) {
			paths.push(vec![pool_id, second]);
		}
	}

	Ok(paths)
}
