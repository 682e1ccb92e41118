//! Nettoyage des cellules et parsers de champs

pub mod clean;
pub mod coords;
pub mod leads;
pub mod year;

pub use clean::clean_value;
pub use coords::parse_coordinates;
pub use leads::parse_leads;
pub use year::parse_year;
