//! Tree-layout arithmetic.
//!
//! The module fixes two deliberately separate formulations:
//!
//! * **Exact layout** ([`estimate`]): the leaf level is reduced by ceiling
//!   division until one node remains. Partially filled nodes on the right
//!   edge are counted once; no padding leaves are introduced.
//! * **Padded layout** ([`size_padded`]): the leaf level is rounded up to
//!   `arity^height` and node counts follow the geometric series of a full
//!   k-ary tree.
//!
//! Both formulations agree on the height for every input, but only the
//! exact layout reports per-level counts and only the padded layout reports
//! padding. Callers pick the one answering their question.

mod estimate;
mod padded;
mod types;

pub use estimate::estimate;
pub use padded::size_padded;
pub use types::{Fanout, PaddedLayout, TreeShape};
