use crate::{Asset, ExtendedAsset, Moment, Price, SymbolCode};
use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Two-asset curve pool.
///
/// `amplifier` and `fee` are set when the pool is created and are never changed by trades.
/// `fee` is expressed in basis points.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub struct PoolInfo<AccountId> {
	pub id: SymbolCode,
	pub reserve0: ExtendedAsset<AccountId>,
	pub reserve1: ExtendedAsset<AccountId>,
	pub liquidity: ExtendedAsset<AccountId>,
	pub amplifier: u64,
	pub fee: u32,
	pub volume0: Asset,
	pub volume1: Asset,
	pub price0_last: Price,
	pub price1_last: Price,
	pub virtual_price: Price,
	pub last_updated: Moment,
}

impl<AccountId: Clone + PartialEq> PoolInfo<AccountId> {
	pub fn new(
		id: SymbolCode,
		reserve0: ExtendedAsset<AccountId>,
		reserve1: ExtendedAsset<AccountId>,
		liquidity: ExtendedAsset<AccountId>,
		amplifier: u64,
		fee: u32,
		last_updated: Moment,
	) -> Self {
		Self {
			id,
			volume0: Asset::zero(reserve0.quantity.symbol),
			volume1: Asset::zero(reserve1.quantity.symbol),
			reserve0,
			reserve1,
			liquidity,
			amplifier,
			fee,
			price0_last: Price::from(1u128),
			price1_last: Price::from(1u128),
			virtual_price: Price::from(1u128),
			last_updated,
		}
	}

	pub fn symbol_codes(&self) -> (SymbolCode, SymbolCode) {
		(self.reserve0.code(), self.reserve1.code())
	}

	/// Code of the asset on the other side of the pool, if `code` is one of the pool assets.
	pub fn counterpart(&self, code: SymbolCode) -> Option<SymbolCode> {
		let (code0, code1) = self.symbol_codes();
		if code0 == code {
			Some(code1)
		} else if code1 == code {
			Some(code0)
		} else {
			None
		}
	}

	/// `true` when `code` is the symbol of `reserve0`.
	pub fn is_reserve0(&self, code: SymbolCode) -> bool {
		self.reserve0.code() == code
	}

	/// Reserves ordered as (in, out) for an incoming asset of class `code`.
	pub fn reserves_for(&self, code: SymbolCode) -> (&ExtendedAsset<AccountId>, &ExtendedAsset<AccountId>) {
		if self.is_reserve0(code) {
			(&self.reserve0, &self.reserve1)
		} else {
			(&self.reserve1, &self.reserve0)
		}
	}
}
