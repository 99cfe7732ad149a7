use crate::types::Balance;
use crate::MathError::{
	self, InsufficientOutReserve, InvalidFee, Overflow, ReserveOutOfBounds, ZeroAmount, ZeroAmplification, ZeroReserve,
};
use crate::{ensure, to_balance, to_u256};
use core::convert::TryFrom;
use num_traits::Zero;
use primitive_types::U256;

/// Number of Newton steps used for both the invariant and the new reserve.
/// The last iterate is used when the sequence has not settled by then.
pub const MAX_ITERATIONS: u8 = 10;

/// Reserves have to stay strictly below this value so that the cubic terms of the
/// invariant stay representable.
pub const MAX_RESERVE: Balance = (1 << 62) - 1;

/// Trade fee is expressed in parts per `FEE_DENOMINATOR` (basis points).
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Calculating amount to be received from the pool given the amount to be sent to the pool,
/// both reserves, amplification and trade fee.
///
/// - `amount_in` - amount of the incoming asset
/// - `reserve_in` - pool reserve of the incoming asset
/// - `reserve_out` - pool reserve of the outgoing asset
/// - `amplifier` - amplification coefficient of the pool
/// - `fee` - trade fee in basis points
///
/// Example: `get_amount_out(100_000, 3_432_247_548, 6_169_362_700, 450, 4) == Ok(100_110)`
pub fn get_amount_out(
	amount_in: Balance,
	reserve_in: Balance,
	reserve_out: Balance,
	amplifier: Balance,
	fee: u32,
) -> Result<Balance, MathError> {
	ensure!(!amount_in.is_zero(), ZeroAmount);
	ensure!(!amplifier.is_zero(), ZeroAmplification);
	ensure!(!reserve_in.is_zero() && !reserve_out.is_zero(), ZeroReserve);
	ensure!(reserve_in < MAX_RESERVE && reserve_out < MAX_RESERVE, ReserveOutOfBounds);
	ensure!(fee <= FEE_DENOMINATOR, InvalidFee);

	let d = calculate_d_internal(reserve_in, reserve_out, amplifier).ok_or(Overflow)?;

	let new_reserve_in = reserve_in.checked_add(amount_in).ok_or(Overflow)?;
	let new_reserve_out = calculate_y_internal(new_reserve_in, d, amplifier).ok_or(Overflow)?;

	ensure!(reserve_out > new_reserve_out, InsufficientOutReserve);
	let amount_out = reserve_out - new_reserve_out;

	let fee_amount = calculate_fee_amount(amount_out, fee).ok_or(Overflow)?;
	amount_out.checked_sub(fee_amount).ok_or(Overflow)
}

/// Invariant D of a two-asset pool.
pub fn calculate_d(reserve_in: Balance, reserve_out: Balance, amplifier: Balance) -> Result<Balance, MathError> {
	ensure!(!amplifier.is_zero(), ZeroAmplification);
	ensure!(!reserve_in.is_zero() && !reserve_out.is_zero(), ZeroReserve);
	ensure!(reserve_in < MAX_RESERVE && reserve_out < MAX_RESERVE, ReserveOutOfBounds);

	calculate_d_internal(reserve_in, reserve_out, amplifier).ok_or(Overflow)
}

/// Fee taken from `amount`, rounded down.
pub fn calculate_fee_amount(amount: Balance, fee: u32) -> Option<Balance> {
	amount
		.checked_mul(fee as Balance)?
		.checked_div(FEE_DENOMINATOR as Balance)
}

/// Solves `A·sum·n^n + D = A·D·n^n + D^(n+1) / (n^n·prod)` for n = 2.
pub(crate) fn calculate_d_internal(reserve_in: Balance, reserve_out: Balance, amplifier: Balance) -> Option<Balance> {
	let (reserve_in_hp, reserve_out_hp, amp_hp) = to_u256!(reserve_in, reserve_out, amplifier);
	let (two_hp, three_hp) = to_u256!(2u8, 3u8);
	let balance_max_hp = to_u256!(Balance::MAX);

	let sum_hp = reserve_in_hp.checked_add(reserve_out_hp)?;
	let amp_sum_hp = amp_hp.checked_mul(sum_hp)?;
	let double_reserve_in = reserve_in_hp.checked_mul(two_hp)?;
	let double_reserve_out = reserve_out_hp.checked_mul(two_hp)?;
	let amp_factor = amp_hp.checked_mul(two_hp)?.checked_sub(U256::one())?;

	let mut d = sum_hp;
	let mut d_prev = U256::zero();

	for _ in 0..MAX_ITERATIONS {
		if d == d_prev {
			break;
		}

		let prod1 = d
			.checked_mul(d)?
			.checked_div(double_reserve_in)?
			.checked_mul(d)?
			.checked_div(double_reserve_out)?;
		d_prev = d;

		let numerator_sum = amp_sum_hp.checked_add(prod1)?;
		if numerator_sum > balance_max_hp {
			return None;
		}

		d = two_hp
			.checked_mul(d)?
			.checked_mul(numerator_sum)?
			.checked_div(amp_factor.checked_mul(d)?.checked_add(three_hp.checked_mul(prod1)?)?)?;
	}

	Balance::try_from(d).ok()
}

/// New reserve of the outgoing asset: solves `x^2 + b·x = c` where
/// `b = reserve_in' + D / 2A - D` and `c = D^3 / (4·reserve_in'·2A)`.
pub(crate) fn calculate_y_internal(new_reserve_in: Balance, d: Balance, amplifier: Balance) -> Option<Balance> {
	let (reserve_in_hp, d_hp, amp_hp) = to_u256!(new_reserve_in, d, amplifier);
	let (two_hp, four_hp) = to_u256!(2u8, 4u8);

	// b is carried without the `- D` term which is subtracted once the rest of the denominator is known
	let b_hp = reserve_in_hp.checked_add(d_hp.checked_div(amp_hp.checked_mul(two_hp)?)?)?;
	let c_hp = d_hp
		.checked_mul(d_hp)?
		.checked_div(reserve_in_hp.checked_mul(two_hp)?)?
		.checked_mul(d_hp)?
		.checked_div(amp_hp.checked_mul(four_hp)?)?;

	let mut y = d_hp;
	let mut y_prev = U256::zero();

	for _ in 0..MAX_ITERATIONS {
		if y == y_prev {
			break;
		}
		y_prev = y;
		y = y
			.checked_mul(y)?
			.checked_add(c_hp)?
			.checked_div(two_hp.checked_mul(y)?.checked_add(b_hp)?.checked_sub(d_hp)?)?;
	}

	to_balance!(y).ok()
}
