
use crate::types::Balance;

pub(crate) const ONE: Balance = 1_000_000_000;
