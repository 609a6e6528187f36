use serde::{Deserialize, Serialize};

use crate::schema::{
    IDX_CONTRACT_24_MONTH, IDX_CONTRACT_6_MONTH, IDX_CONTRACT_MONTH_TO_MONTH,
    IDX_PLAN_DATA_VOICE, IDX_PLAN_PREMIUM_BUNDLE, IDX_REGION_REGIONAL_CITY, IDX_REGION_RURAL_AREA,
    IDX_TECH_3G, IDX_TECH_4G_LTE, IDX_TECH_5G,
};

/// Customer region. Addis Ababa is the base category absorbed during model
/// training; only the two non-base regions carry indicator columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Addis Ababa (Base)")]
    AddisAbaba,
    #[serde(rename = "Regional City (Mid Density)")]
    RegionalCity,
    #[serde(rename = "Rural Area (Low Density)")]
    RuralArea,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddisAbaba => "Addis Ababa (Base)",
            Self::RegionalCity => "Regional City (Mid Density)",
            Self::RuralArea => "Rural Area (Low Density)",
        }
    }

    pub(crate) fn indicator_index(self) -> Option<usize> {
        match self {
            Self::AddisAbaba => None,
            Self::RegionalCity => Some(IDX_REGION_REGIONAL_CITY),
            Self::RuralArea => Some(IDX_REGION_RURAL_AREA),
        }
    }
}

/// Contract length. 12-Month is the base category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "12-Month (Base)")]
    TwelveMonth,
    #[serde(rename = "24-Month")]
    TwentyFourMonth,
    #[serde(rename = "6-Month")]
    SixMonth,
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
}

impl ContractType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwelveMonth => "12-Month (Base)",
            Self::TwentyFourMonth => "24-Month",
            Self::SixMonth => "6-Month",
            Self::MonthToMonth => "Month-to-month",
        }
    }

    /// Short commitments (6-Month, Month-to-month) carry elevated churn risk.
    pub fn is_short_term(self) -> bool {
        matches!(self, Self::SixMonth | Self::MonthToMonth)
    }

    pub(crate) fn indicator_index(self) -> Option<usize> {
        match self {
            Self::TwelveMonth => None,
            Self::TwentyFourMonth => Some(IDX_CONTRACT_24_MONTH),
            Self::SixMonth => Some(IDX_CONTRACT_6_MONTH),
            Self::MonthToMonth => Some(IDX_CONTRACT_MONTH_TO_MONTH),
        }
    }
}

/// Network technology the customer primarily uses.
///
/// Unlike every other group, the "5G/4G (Base)" selection does NOT encode to
/// all-zeros: the trained model has no combined 5G/4G column, so the base
/// selection collapses into the `Network_Technology_5G` indicator. This is
/// an intentional asymmetry carried over from model training, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkTechnology {
    #[serde(rename = "5G/4G (Base)")]
    ModernBase,
    #[serde(rename = "3G")]
    ThreeG,
    #[serde(rename = "4G/LTE")]
    FourGLte,
}

impl NetworkTechnology {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModernBase => "5G/4G (Base)",
            Self::ThreeG => "3G",
            Self::FourGLte => "4G/LTE",
        }
    }

    pub(crate) fn indicator_index(self) -> Option<usize> {
        match self {
            // Base maps onto the 5G column (see type-level docs).
            Self::ModernBase => Some(IDX_TECH_5G),
            Self::ThreeG => Some(IDX_TECH_3G),
            Self::FourGLte => Some(IDX_TECH_4G_LTE),
        }
    }
}

/// Service plan. Basic Mobile Voice is the base category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServicePlan {
    #[serde(rename = "Basic Mobile Voice (Base)")]
    BasicVoice,
    #[serde(rename = "Data/Internet + Voice")]
    DataVoice,
    #[serde(rename = "Premium Bundle (Data, telebirr, VAS)")]
    PremiumBundle,
}

impl ServicePlan {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicVoice => "Basic Mobile Voice (Base)",
            Self::DataVoice => "Data/Internet + Voice",
            Self::PremiumBundle => "Premium Bundle (Data, telebirr, VAS)",
        }
    }

    pub(crate) fn indicator_index(self) -> Option<usize> {
        match self {
            Self::BasicVoice => None,
            Self::DataVoice => Some(IDX_PLAN_DATA_VOICE),
            Self::PremiumBundle => Some(IDX_PLAN_PREMIUM_BUNDLE),
        }
    }
}

/// Raw attributes for one evaluation request.
///
/// Created fresh per request and discarded after the verdict. Value bounds
/// (tenure 1–84, charges 100.0–3000.0, support calls 0–10, outage 0–5) are
/// the input surface's contract; the encoder does not re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub tenure_months: u32,
    pub monthly_charges_etb: f64,
    pub support_calls_3m: u32,
    pub outage_score: u8,
    pub region: Region,
    pub contract: ContractType,
    pub technology: NetworkTechnology,
    pub plan: ServicePlan,
}

impl CustomerProfile {
    /// Derived lifetime spend: monthly charges × tenure, computed from the
    /// same values the direct numeric features use.
    pub fn total_charges_etb(&self) -> f64 {
        self.monthly_charges_etb * f64::from(self.tenure_months)
    }
}
