use crate::Balance;
use codec::{Decode, Encode, MaxEncodedLen};
use core::fmt;
use curve_math::types::AssetReserve;
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Up to seven upper-case letters packed into a `u64`, first letter in the lowest byte.
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolCode(u64);

impl SymbolCode {
	pub const MAX_LEN: usize = 7;

	pub fn new(code: &str) -> Option<Self> {
		let bytes = code.as_bytes();
		if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
			return None;
		}

		let mut raw = 0u64;
		for (i, c) in bytes.iter().enumerate() {
			if !c.is_ascii_uppercase() {
				return None;
			}
			raw |= (*c as u64) << (8 * i);
		}

		Some(Self(raw))
	}

	pub fn raw(&self) -> u64 {
		self.0
	}

	pub fn is_valid(&self) -> bool {
		let mut raw = self.0;
		if raw == 0 {
			return false;
		}
		// letters must be contiguous from the lowest byte
		while raw != 0 {
			if !(raw as u8).is_ascii_uppercase() {
				return false;
			}
			raw >>= 8;
		}
		true
	}
}

impl fmt::Display for SymbolCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut raw = self.0;
		while raw != 0 {
			write!(f, "{}", (raw as u8) as char)?;
			raw >>= 8;
		}
		Ok(())
	}
}

impl fmt::Debug for SymbolCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SymbolCode({})", self)
	}
}

#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Symbol {
	pub code: SymbolCode,
	pub precision: u8,
}

impl Symbol {
	pub fn new(code: SymbolCode, precision: u8) -> Self {
		Self { code, precision }
	}
}

#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Asset {
	pub amount: Balance,
	pub symbol: Symbol,
}

impl Asset {
	pub fn new(amount: Balance, symbol: Symbol) -> Self {
		Self { amount, symbol }
	}

	pub fn zero(symbol: Symbol) -> Self {
		Self { amount: 0, symbol }
	}

	pub fn is_zero(&self) -> bool {
		self.amount == 0
	}

	/// Returns `None` when symbols differ or the sum overflows.
	pub fn checked_add(&self, other: &Asset) -> Option<Asset> {
		if self.symbol != other.symbol {
			return None;
		}
		Some(Asset::new(self.amount.checked_add(other.amount)?, self.symbol))
	}

	/// Returns `None` when symbols differ or the result would be negative.
	pub fn checked_sub(&self, other: &Asset) -> Option<Asset> {
		if self.symbol != other.symbol {
			return None;
		}
		Some(Asset::new(self.amount.checked_sub(other.amount)?, self.symbol))
	}
}

impl From<&Asset> for AssetReserve {
	fn from(value: &Asset) -> Self {
		AssetReserve::new(value.amount, value.symbol.precision)
	}
}

/// Symbol together with its issuer. Two assets are of the same class only if both match.
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub struct ExtendedSymbol<AccountId> {
	pub symbol: Symbol,
	pub issuer: AccountId,
}

impl<AccountId> ExtendedSymbol<AccountId> {
	pub fn new(symbol: Symbol, issuer: AccountId) -> Self {
		Self { symbol, issuer }
	}
}

#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Debug)]
pub struct ExtendedAsset<AccountId> {
	pub quantity: Asset,
	pub issuer: AccountId,
}

impl<AccountId: Clone> ExtendedAsset<AccountId> {
	pub fn new(amount: Balance, symbol: &ExtendedSymbol<AccountId>) -> Self {
		Self {
			quantity: Asset::new(amount, symbol.symbol),
			issuer: symbol.issuer.clone(),
		}
	}

	pub fn extended_symbol(&self) -> ExtendedSymbol<AccountId> {
		ExtendedSymbol::new(self.quantity.symbol, self.issuer.clone())
	}

	pub fn amount(&self) -> Balance {
		self.quantity.amount
	}

	pub fn code(&self) -> SymbolCode {
		self.quantity.symbol.code
	}
}
