pub mod circular;
pub mod linked;
pub mod naive;

pub use circular::CircularDeque;
#[cfg(feature = "linked")]
pub use linked::LinkedDeque;
#[cfg(feature = "naive")]
pub use naive::NaiveDeque;
