/// Number of features in the model's input vector.
pub const FEATURE_COUNT: usize = 15;

/// Feature column names in the exact order the trained model expects.
/// The encoder writes positions, the artifact loader validates declared
/// names against this list; nothing else may reorder the vector.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "Tenure_Months",
    "Monthly_Charges_ETB",
    "Support_Calls_3Months",
    "Network_Outage_Score_0_5",
    "Total_Charges_ETB",
    // One-hot indicators; the base category of each group encodes to
    // all-zeros within the group.
    "Region_Regional City (Mid Density)",
    "Region_Rural Area (Low Density)",
    "Contract_Type_24-Month",
    "Contract_Type_6-Month",
    "Contract_Type_Month-to-month",
    "Service_Plan_Data/Internet + Voice",
    "Service_Plan_Premium Bundle (Data, telebirr, VAS)",
    "Network_Technology_3G",
    "Network_Technology_4G/LTE",
    "Network_Technology_5G",
];

pub(crate) const IDX_TENURE_MONTHS: usize = 0;
pub(crate) const IDX_MONTHLY_CHARGES: usize = 1;
pub(crate) const IDX_SUPPORT_CALLS: usize = 2;
pub(crate) const IDX_OUTAGE_SCORE: usize = 3;
pub(crate) const IDX_TOTAL_CHARGES: usize = 4;
pub(crate) const IDX_REGION_REGIONAL_CITY: usize = 5;
pub(crate) const IDX_REGION_RURAL_AREA: usize = 6;
pub(crate) const IDX_CONTRACT_24_MONTH: usize = 7;
pub(crate) const IDX_CONTRACT_6_MONTH: usize = 8;
pub(crate) const IDX_CONTRACT_MONTH_TO_MONTH: usize = 9;
pub(crate) const IDX_PLAN_DATA_VOICE: usize = 10;
pub(crate) const IDX_PLAN_PREMIUM_BUNDLE: usize = 11;
pub(crate) const IDX_TECH_3G: usize = 12;
pub(crate) const IDX_TECH_4G_LTE: usize = 13;
pub(crate) const IDX_TECH_5G: usize = 14;
