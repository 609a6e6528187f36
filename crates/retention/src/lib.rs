//! Retention decisions derived from a churn prediction.
//!
//! Pure functions over the prediction and the raw profile: no I/O, no state,
//! no failure path. Trigger rules fire independently and in a fixed order so
//! the action list is stable for a given input.

use serde::Serialize;

use scoring::{CustomerProfile, Region};

/// Outage score at or above which the service-quality trigger fires.
pub const OUTAGE_TRIGGER_MIN: u8 = 3;
/// Support-call count at or above which the frustration trigger fires.
pub const SUPPORT_CALLS_TRIGGER_MIN: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "HIGH_RISK")]
    High,
    #[serde(rename = "LOW_RISK")]
    Low,
}

/// Which rule produced a retention action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriggerKind {
    #[serde(rename = "Service Quality")]
    ServiceQuality,
    #[serde(rename = "Geographical")]
    Geographical,
    #[serde(rename = "Support Frustration")]
    SupportFrustration,
    #[serde(rename = "Contract")]
    Contract,
}

impl TriggerKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::ServiceQuality | Self::Geographical | Self::SupportFrustration => {
                Severity::Warning
            }
            Self::Contract => Severity::Info,
        }
    }

    pub fn action_copy(self) -> &'static str {
        match self {
            Self::ServiceQuality => {
                "Proactive credit/data bonus to acknowledge and compensate for service disruption."
            }
            Self::Geographical => {
                "Offer subsidized 4G device/data package tied to a 12-month contract to address regional infrastructure concerns."
            }
            Self::SupportFrustration => {
                "Escalate to the senior retention team for personal follow-up and definitive resolution."
            }
            Self::Contract => {
                "Offer a strong value incentive to upgrade to a stable 12-Month or 24-Month contract."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetentionAction {
    pub trigger: TriggerKind,
    pub severity: Severity,
    pub action: &'static str,
}

impl RetentionAction {
    fn for_trigger(trigger: TriggerKind) -> Self {
        Self {
            trigger,
            severity: trigger.severity(),
            action: trigger.action_copy(),
        }
    }
}

/// Final risk classification plus recommended retention actions for one
/// evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub risk: RiskLevel,
    /// Churn probability as reported by the classifier, unclamped.
    pub probability: f64,
    pub actions: Vec<RetentionAction>,
}

/// Derive the verdict from the prediction and the raw profile.
///
/// Actions are derived only for high-risk predictions. The rules are not
/// mutually exclusive; every applicable trigger fires, in the order below.
pub fn assess(churn_predicted: bool, probability: f64, profile: &CustomerProfile) -> Verdict {
    if !churn_predicted {
        return Verdict {
            risk: RiskLevel::Low,
            probability,
            actions: Vec::new(),
        };
    }

    let mut actions = Vec::new();
    if profile.outage_score >= OUTAGE_TRIGGER_MIN {
        actions.push(RetentionAction::for_trigger(TriggerKind::ServiceQuality));
    }
    if profile.region != Region::AddisAbaba {
        actions.push(RetentionAction::for_trigger(TriggerKind::Geographical));
    }
    if profile.support_calls_3m >= SUPPORT_CALLS_TRIGGER_MIN {
        actions.push(RetentionAction::for_trigger(TriggerKind::SupportFrustration));
    }
    if profile.contract.is_short_term() {
        actions.push(RetentionAction::for_trigger(TriggerKind::Contract));
    }

    Verdict {
        risk: RiskLevel::High,
        probability,
        actions,
    }
}
