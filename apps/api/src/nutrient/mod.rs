// Nutrient recommendation: weighted gap from ideal intake blended with
// ingredient-familiarity overlap, ranked over the external food catalog.

pub mod handlers;
pub mod scoring;
