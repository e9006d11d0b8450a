/// Scan result value type
pub mod scan;
/// Symbology tokens and labels
pub mod symbology;

pub use scan::ScanResult;
pub use symbology::{Symbology, symbology_label};
