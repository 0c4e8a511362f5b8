mod assessment;
mod species;
mod taxon;

pub use assessment::{Assessment, RedListCategory};
pub use species::{CountryRecord, Species};
pub use taxon::{CommonName, TaxonDetail, TaxonOutcome};
