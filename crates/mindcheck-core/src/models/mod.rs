pub mod region;
pub mod risk;
