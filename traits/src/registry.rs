use crate::{PoolInfo, SymbolCode};
use sp_std::vec::Vec;

/// Storage of curve pools.
pub trait PoolRegistry<AccountId> {
	/// Pool with given id.
	fn get(&self, pool_id: SymbolCode) -> Option<PoolInfo<AccountId>>;

	/// Pool connecting the two asset codes, regardless of which side holds which asset.
	fn get_by_pair(&self, code_a: SymbolCode, code_b: SymbolCode) -> Option<PoolInfo<AccountId>>;

	/// All pools, ordered by id.
	fn pools(&self) -> Vec<PoolInfo<AccountId>>;

	/// Apply `f` to the stored pool. Returns `None` if the pool does not exist.
	fn modify<R, F>(&mut self, pool_id: SymbolCode, f: F) -> Option<R>
	where
		F: FnOnce(&mut PoolInfo<AccountId>) -> R;
}
