pub mod comparison;
pub mod enumeration;
pub mod greedy;
