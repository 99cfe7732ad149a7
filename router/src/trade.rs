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

use crate::path::find_trade_paths;
use crate::types::{MinOutput, Path, TradeOutcome};
use crate::{Config, Error, LOG_TARGET};
use curve_math::ensure;
use curve_math::{curve, price, MathError};
use curve_traits::{
	Asset, ExtendedAsset, Moment, PoolInfo, PoolRegistry, Price, SymbolCode, TimestampProvider, Transfer,
};
use sp_std::vec::Vec;

const SWAP_MEMO: &str = "swap";

/// Pool records updated by a finalized path, not yet written to the registry.
struct StagedTrade<AccountId> {
	output: ExtendedAsset<AccountId>,
	pools: Vec<PoolInfo<AccountId>>,
}

pub struct Router<T: Config> {
	account: T::AccountId,
	registry: T::Registry,
	currency: T::Currency,
}

impl<T: Config> Router<T> {
	pub fn new(account: T::AccountId, registry: T::Registry, currency: T::Currency) -> Self {
		Self {
			account,
			registry,
			currency,
		}
	}

	pub fn registry(&self) -> &T::Registry {
		&self.registry
	}

	pub fn currency(&self) -> &T::Currency {
		&self.currency
	}

	/// Quote of a single pool, without the issuer check.
	pub fn get_amount_out(&self, quantity: &Asset, pool_id: SymbolCode) -> Result<Asset, Error> {
		let pool = self.registry.get(pool_id).ok_or(Error::PoolNotFound)?;
		let (reserve_in, reserve_out) = pool.reserves_for(quantity.symbol.code);
		ensure!(reserve_in.quantity.symbol == quantity.symbol, Error::ReserveMismatch);

		let amount_out = curve::get_amount_out(
			quantity.amount,
			reserve_in.amount(),
			reserve_out.amount(),
			pool.amplifier.into(),
			pool.fee,
		)?;

		Ok(Asset::new(amount_out, reserve_out.quantity.symbol))
	}

	/// Path with the largest output for `input` converted into `code_out`.
	///
	/// Candidates are quoted with a dry run. Ties keep the path found first.
	pub fn best_trade(
		&self,
		input: &ExtendedAsset<T::AccountId>,
		code_out: SymbolCode,
	) -> Result<(Path, ExtendedAsset<T::AccountId>), Error> {
		let paths = find_trade_paths(&self.registry, input.code(), code_out)?;
		ensure!(!paths.is_empty(), Error::NoPath);

		log::debug!(target: LOG_TARGET, "{} candidate paths for {:?} -> {:?}", paths.len(), input, code_out);

		let mut best: Option<(Path, ExtendedAsset<T::AccountId>)> = None;
		for path in paths {
			let output = match self.dry_run(input, &path)? {
				TradeOutcome::Matched(output) => output,
				TradeOutcome::Mismatched { .. } => continue,
			};

			log::debug!(target: LOG_TARGET, "path {:?} returns {:?}", path, output);

			let best_amount = best.as_ref().map(|(_, best_output)| best_output.amount()).unwrap_or_default();
			if output.amount() > best_amount {
				best = Some((path, output));
			}
		}

		best.ok_or(Error::NoMatchingExchange)
	}

	/// Convert `input` along the best path and send the output to `receiver`.
	///
	/// `input` is expected to be already credited to the router account.
	pub fn convert(
		&mut self,
		input: ExtendedAsset<T::AccountId>,
		code_out: SymbolCode,
		min_output: &MinOutput<T::AccountId>,
		receiver: &T::AccountId,
	) -> Result<ExtendedAsset<T::AccountId>, Error> {
		let (path, quote) = self.best_trade(&input, code_out)?;
		min_output.validate(&quote)?;

		log::debug!(target: LOG_TARGET, "executing path {:?} for {:?}", path, input);

		let staged = self.finalize(&input, &path)?;

		self.currency
			.transfer(&self.account, receiver, &staged.output, SWAP_MEMO)
			.map_err(|_| {
				log::error!(target: LOG_TARGET, "transfer of {:?} to {:?} failed", staged.output, receiver);
				Error::TransferFailed
			})?;

		self.commit(staged.pools)?;

		Ok(staged.output)
	}

	/// Execute `path` for `input`.
	///
	/// With `mutate` unset this is a dry run: nothing is written and a reserve mismatch is
	/// reported as [`TradeOutcome::Mismatched`]. With `mutate` set a mismatch is an error and
	/// the updated pools are written to the registry once every hop succeeded.
	pub fn apply_trade(
		&mut self,
		input: &ExtendedAsset<T::AccountId>,
		path: &[SymbolCode],
		mutate: bool,
	) -> Result<TradeOutcome<T::AccountId>, Error> {
		if !mutate {
			return self.dry_run(input, path);
		}

		let staged = self.finalize(input, path)?;
		self.commit(staged.pools)?;

		Ok(TradeOutcome::Matched(staged.output))
	}

	fn dry_run(
		&self,
		input: &ExtendedAsset<T::AccountId>,
		path: &[SymbolCode],
	) -> Result<TradeOutcome<T::AccountId>, Error> {
		ensure!(!path.is_empty(), Error::EmptyPath);

		let mut amount = input.clone();
		for pool_id in path {
			let pool = self.registry.get(*pool_id).ok_or(Error::PoolNotFound)?;
			let (reserve_in, reserve_out) = pool.reserves_for(amount.code());

			if reserve_in.extended_symbol() != amount.extended_symbol() {
				log::warn!(target: LOG_TARGET, "pool {:?} does not accept {:?}", pool_id, amount);
				return Ok(TradeOutcome::Mismatched { pool_id: *pool_id });
			}

			amount = Self::trade_output(&pool, &amount, reserve_in, reserve_out)?;
			log::trace!(target: LOG_TARGET, "dry run through {:?} returns {:?}", pool_id, amount);
		}

		Ok(TradeOutcome::Matched(amount))
	}

	/// Strict execution of `path` on copies of the pools.
	///
	/// A pool visited twice sees the reserves left by its previous hop.
	fn finalize(
		&self,
		input: &ExtendedAsset<T::AccountId>,
		path: &[SymbolCode],
	) -> Result<StagedTrade<T::AccountId>, Error> {
		ensure!(!path.is_empty(), Error::EmptyPath);

		let now = T::TimestampProvider::now();
		let mut staged: Vec<PoolInfo<T::AccountId>> = Vec::new();
		let mut amount = input.clone();

		for pool_id in path {
			let position = staged.iter().position(|pool| pool.id == *pool_id);
			let mut pool = match position {
				Some(idx) => staged[idx].clone(),
				None => self.registry.get(*pool_id).ok_or(Error::PoolNotFound)?,
			};

			let (reserve_in, reserve_out) = pool.reserves_for(amount.code());
			if reserve_in.extended_symbol() != amount.extended_symbol() {
				log::error!(target: LOG_TARGET, "pool {:?} does not accept {:?}", pool_id, amount);
				return Err(Error::ReserveMismatch);
			}

			let output = Self::trade_output(&pool, &amount, reserve_in, reserve_out)?;
			Self::update_pool(&mut pool, &amount.quantity, &output.quantity, now)?;

			log::trace!(target: LOG_TARGET, "hop through {:?}: {:?} -> {:?}", pool_id, amount, output);

			match position {
				Some(idx) => staged[idx] = pool,
				None => staged.push(pool),
			}
			amount = output;
		}

		Ok(StagedTrade {
			output: amount,
			pools: staged,
		})
	}

	fn commit(&mut self, pools: Vec<PoolInfo<T::AccountId>>) -> Result<(), Error> {
		for updated in pools {
			self.registry
				.modify(updated.id, |pool| *pool = updated)
				.ok_or(Error::PoolNotFound)?;
		}
		Ok(())
	}

	fn trade_output(
		pool: &PoolInfo<T::AccountId>,
		amount_in: &ExtendedAsset<T::AccountId>,
		reserve_in: &ExtendedAsset<T::AccountId>,
		reserve_out: &ExtendedAsset<T::AccountId>,
	) -> Result<ExtendedAsset<T::AccountId>, Error> {
		let amount_out = curve::get_amount_out(
			amount_in.amount(),
			reserve_in.amount(),
			reserve_out.amount(),
			pool.amplifier.into(),
			pool.fee,
		)?;

		Ok(ExtendedAsset::new(amount_out, &reserve_out.extended_symbol()))
	}

	/// Apply a trade of `amount_in` for `amount_out` to the pool record.
	fn update_pool(
		pool: &mut PoolInfo<T::AccountId>,
		amount_in: &Asset,
		amount_out: &Asset,
		now: Moment,
	) -> Result<(), Error> {
		ensure!(!amount_out.is_zero(), Error::InvalidInput);

		let (reserve_in, reserve_out, volume_in, price_in, price_out) = if pool.is_reserve0(amount_in.symbol.code) {
			(
				&mut pool.reserve0,
				&mut pool.reserve1,
				&mut pool.volume0,
				&mut pool.price0_last,
				&mut pool.price1_last,
			)
		} else {
			(
				&mut pool.reserve1,
				&mut pool.reserve0,
				&mut pool.volume1,
				&mut pool.price1_last,
				&mut pool.price0_last,
			)
		};

		reserve_in.quantity = reserve_in.quantity.checked_add(amount_in).ok_or(Error::Overflow)?;
		reserve_out.quantity = reserve_out
			.quantity
			.checked_sub(amount_out)
			.ok_or(Error::InsufficientReserve)?;
		ensure!(!reserve_out.quantity.is_zero(), Error::InsufficientReserve);

		*volume_in = volume_in.checked_add(amount_in).ok_or(Error::Overflow)?;

		// units of the other asset per unit of each side
		*price_in = or_previous(
			price::calculate_price(amount_out.into(), amount_in.into(), T::MAX_PRECISION),
			*price_in,
		)?;
		*price_out = or_previous(
			price::calculate_price(amount_in.into(), amount_out.into(), T::MAX_PRECISION),
			*price_out,
		)?;

		pool.virtual_price = or_previous(
			price::calculate_virtual_price(
				(&pool.reserve0.quantity).into(),
				(&pool.reserve1.quantity).into(),
				(&pool.liquidity.quantity).into(),
				T::MAX_PRECISION,
			),
			pool.virtual_price,
		)?;
		pool.last_updated = now;

		Ok(())
	}
}

/// Derived prices keep their previous value when the divisor normalizes to zero.
fn or_previous(price: Result<Price, MathError>, previous: Price) -> Result<Price, Error> {
	match price {
		Err(MathError::DivisionByZero) => Ok(previous),
		price => price.map_err(Into::into),
	}
}
