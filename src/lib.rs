//! Synthetic crop-market data: generation, caching, filtering and the
//! dashboard view-model. The egui front end lives in the `agro-panda` binary.

pub mod config;
pub mod data;
pub mod state;
