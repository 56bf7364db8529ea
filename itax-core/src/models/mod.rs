mod regime;
mod regime_inputs;
mod tax_breakdown;
mod tax_slab;

pub use regime::{AgeGroup, Regime};
pub use regime_inputs::{NewRegimeInputs, OldRegimeInputs, RegimeInputs};
pub use tax_breakdown::{SlabContribution, TaxBreakdown};
pub use tax_slab::TaxSlab;
