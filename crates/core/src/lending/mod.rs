pub mod amortization;
pub mod qualification;
