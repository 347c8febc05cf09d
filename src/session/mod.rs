pub mod browse;
pub mod cards;
pub mod lookup;
pub mod quiz;
