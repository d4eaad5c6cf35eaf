use serde::{Deserialize, Serialize};

/// Who is signing up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Founder,
    Investor,
    Fund,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Founder, Role::Investor, Role::Fund];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Founder => "Founder",
            Role::Investor => "Investor",
            Role::Fund => "Fund",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Founder => "Founder",
            Role::Investor => "Investor",
            Role::Fund => "Investment Firm / Fund",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    pub fn is_investing(&self) -> bool {
        matches!(self, Role::Investor | Role::Fund)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FounderStage {
    Idea,
    #[serde(rename = "MVP")]
    Mvp,
    Revenue,
    Growth,
}

impl FounderStage {
    pub const ALL: [FounderStage; 4] = [
        FounderStage::Idea,
        FounderStage::Mvp,
        FounderStage::Revenue,
        FounderStage::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FounderStage::Idea => "Idea",
            FounderStage::Mvp => "MVP",
            FounderStage::Revenue => "Revenue",
            FounderStage::Growth => "Growth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FounderStage::Idea => "Idea Stage",
            FounderStage::Mvp => "MVP / Pre-revenue",
            FounderStage::Revenue => "Revenue Generating",
            FounderStage::Growth => "Growth Stage",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == value)
    }
}

/// Investment focus for investors and funds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingStage {
    #[serde(rename = "Pre-seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    Later,
}

impl FundingStage {
    pub const ALL: [FundingStage; 4] = [
        FundingStage::PreSeed,
        FundingStage::Seed,
        FundingStage::SeriesA,
        FundingStage::Later,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStage::PreSeed => "Pre-seed",
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::Later => "Later",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FundingStage::Later => "Series B+",
            other => other.as_str(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == value)
    }
}

/// The fixed set of answers to "biggest pain in fundraising/deal flow".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PainPoint {
    FindingCounterparts,
    RepeatingInformation,
    TrackingConversations,
    GettingFeedback,
    ManagingDealFlow,
    Other,
}

impl PainPoint {
    pub const ALL: [PainPoint; 6] = [
        PainPoint::FindingCounterparts,
        PainPoint::RepeatingInformation,
        PainPoint::TrackingConversations,
        PainPoint::GettingFeedback,
        PainPoint::ManagingDealFlow,
        PainPoint::Other,
    ];

    /// Wire value and display text are the same sentence.
    pub fn as_str(&self) -> &'static str {
        match self {
            PainPoint::FindingCounterparts => "Finding relevant investors or startups",
            PainPoint::RepeatingInformation => "Sending the same information repeatedly",
            PainPoint::TrackingConversations => "Tracking applications and conversations",
            PainPoint::GettingFeedback => "Getting feedback or status updates",
            PainPoint::ManagingDealFlow => "Managing deal flow efficiently",
            PainPoint::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pain| pain.as_str() == value)
    }
}

/// A single edit coming from the form.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Email(String),
    Role(Option<Role>),
    FounderStage(Option<FounderStage>),
    FundingStage(Option<FundingStage>),
    BiggestPain(Option<PainPoint>),
    DetailedPain(String),
}

/// In-memory form values for one visit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupDraft {
    pub email: String,
    pub role: Option<Role>,
    pub founder_stage: Option<FounderStage>,
    pub funding_stage: Option<FundingStage>,
    pub biggest_pain: Option<PainPoint>,
    pub detailed_pain: String,
}

impl SignupDraft {
    /// Writes one field. A role change always clears both stage fields.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Email(email) => self.email = email,
            FieldUpdate::Role(role) => {
                self.role = role;
                self.founder_stage = None;
                self.funding_stage = None;
            }
            FieldUpdate::FounderStage(stage) => self.founder_stage = stage,
            FieldUpdate::FundingStage(stage) => self.funding_stage = stage,
            FieldUpdate::BiggestPain(pain) => self.biggest_pain = pain,
            FieldUpdate::DetailedPain(text) => self.detailed_pain = text,
        }
    }

    pub fn shows_founder_stage(&self) -> bool {
        self.role == Some(Role::Founder)
    }

    pub fn shows_funding_stage(&self) -> bool {
        self.role.map_or(false, |role| role.is_investing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_stages(role: Role) -> SignupDraft {
        SignupDraft {
            email: "a@b.com".to_string(),
            role: Some(role),
            founder_stage: Some(FounderStage::Revenue),
            funding_stage: Some(FundingStage::SeriesA),
            biggest_pain: Some(PainPoint::Other),
            detailed_pain: "notes".to_string(),
        }
    }

    #[test]
    fn role_change_clears_both_stages() {
        for from in Role::ALL {
            for to in Role::ALL.into_iter().map(Some).chain([None]) {
                let mut draft = draft_with_stages(from);
                draft.apply(FieldUpdate::Role(to));
                assert_eq!(draft.role, to);
                assert_eq!(draft.founder_stage, None, "{:?} -> {:?}", from, to);
                assert_eq!(draft.funding_stage, None, "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn investor_to_founder_drops_funding_stage() {
        let mut draft = SignupDraft::default();
        draft.apply(FieldUpdate::Role(Some(Role::Investor)));
        draft.apply(FieldUpdate::FundingStage(Some(FundingStage::Seed)));
        assert_eq!(draft.funding_stage, Some(FundingStage::Seed));

        draft.apply(FieldUpdate::Role(Some(Role::Founder)));
        assert_eq!(draft.funding_stage, None);
        assert!(draft.shows_founder_stage());
        assert!(!draft.shows_funding_stage());
    }

    #[test]
    fn other_fields_leave_stages_alone() {
        let mut draft = draft_with_stages(Role::Founder);
        draft.apply(FieldUpdate::Email("x@y.io".to_string()));
        draft.apply(FieldUpdate::BiggestPain(Some(PainPoint::GettingFeedback)));
        draft.apply(FieldUpdate::DetailedPain(String::new()));
        assert_eq!(draft.founder_stage, Some(FounderStage::Revenue));
        assert_eq!(draft.funding_stage, Some(FundingStage::SeriesA));
        assert_eq!(draft.email, "x@y.io");
    }

    #[test]
    fn select_values_parse_back() {
        assert_eq!(Role::from_value("Fund"), Some(Role::Fund));
        assert_eq!(Role::from_value(""), None);
        assert_eq!(FounderStage::from_value("MVP"), Some(FounderStage::Mvp));
        assert_eq!(FundingStage::from_value("Series A"), Some(FundingStage::SeriesA));
        assert_eq!(FundingStage::Later.label(), "Series B+");
        assert_eq!(
            PainPoint::from_value("Managing deal flow efficiently"),
            Some(PainPoint::ManagingDealFlow)
        );
        assert_eq!(PainPoint::ALL.len(), 6);
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&FundingStage::PreSeed).unwrap(), "\"Pre-seed\"");
        assert_eq!(serde_json::to_string(&FounderStage::Mvp).unwrap(), "\"MVP\"");
        assert_eq!(serde_json::to_string(&Role::Investor).unwrap(), "\"Investor\"");
    }
}
