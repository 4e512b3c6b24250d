pub mod baseline;
pub mod scores;
pub mod weights;
