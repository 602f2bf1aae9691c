use crate::config::CatalogMode;

pub const CATALOG_MODE: CatalogMode = CatalogMode::Standard;
pub const FORBID_EMPTY_CLAUSES: bool = true;
pub const FORBID_EMPTY_FORMULA: bool = false;
pub const RNG_SEED: u64 = 0;
