use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The five sectors of the extended circular flow model.
///
/// Every monetary flow in the model runs between two of these actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Sector {
    Households,
    Firms,
    Government,
    Banks,
    Foreign,
}

impl Sector {
    /// Short node identifier used in diagram output.
    pub fn node_id(&self) -> &'static str {
        match self {
            Sector::Households => "HH",
            Sector::Firms => "FI",
            Sector::Government => "GOV",
            Sector::Banks => "BK",
            Sector::Foreign => "FO",
        }
    }

    /// Human-readable node label.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Households => "Private Households",
            Sector::Firms => "Firms",
            Sector::Government => "Government",
            Sector::Banks => "Banks",
            Sector::Foreign => "Foreign Sector",
        }
    }

    /// Node fill color in the rendered diagram.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Sector::Households | Sector::Firms => "#FFCC99",
            Sector::Government => "#99CCFF",
            Sector::Banks => "#99FF99",
            Sector::Foreign => "#FFFF99",
        }
    }
}
