use crate::types::{AssetReserve, Balance, Price};
use crate::MathError::{self, DivisionByZero, Overflow};
use crate::ensure;
use sp_arithmetic::FixedPointNumber;

/// Rescale `amount` given with `precision` decimals to `max_precision` decimals.
///
/// Scaling down truncates.
pub fn normalize(amount: Balance, precision: u8, max_precision: u8) -> Result<Balance, MathError> {
	if precision == max_precision {
		return Ok(amount);
	}

	if precision < max_precision {
		let factor = 10u128
			.checked_pow((max_precision - precision) as u32)
			.ok_or(Overflow)?;
		amount.checked_mul(factor).ok_or(Overflow)
	} else {
		let factor = 10u128
			.checked_pow((precision - max_precision) as u32)
			.ok_or(Overflow)?;
		amount.checked_div(factor).ok_or(Overflow)
	}
}

/// Price of `value0` expressed in `value1`, both normalized to `max_precision` first.
pub fn calculate_price(value0: AssetReserve, value1: AssetReserve, max_precision: u8) -> Result<Price, MathError> {
	let amount0 = normalize(value0.amount, value0.decimals, max_precision)?;
	let amount1 = normalize(value1.amount, value1.decimals, max_precision)?;
	ensure!(amount1 != 0, DivisionByZero);

	Price::checked_from_rational(amount0, amount1).ok_or(Overflow)
}

/// Normalized pool value per unit of liquidity supply.
pub fn calculate_virtual_price(
	reserve0: AssetReserve,
	reserve1: AssetReserve,
	supply: AssetReserve,
	max_precision: u8,
) -> Result<Price, MathError> {
	let amount0 = normalize(reserve0.amount, reserve0.decimals, max_precision)?;
	let amount1 = normalize(reserve1.amount, reserve1.decimals, max_precision)?;
	let supply = normalize(supply.amount, supply.decimals, max_precision)?;
	ensure!(supply != 0, DivisionByZero);

	let total = amount0.checked_add(amount1).ok_or(Overflow)?;
	Price::checked_from_rational(total, supply).ok_or(Overflow)
}
