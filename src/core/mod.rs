pub mod amount;
pub mod decomposition;
pub mod denomination;
