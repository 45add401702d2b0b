use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A completed AN-ACC assessment as handed over by the data-collection wizard.
///
/// Numeric fields carry the raw answer exactly as entered. They are checked
/// against each instrument's domain by `anacc-instruments` and never clamped.
/// Items whose answers are a fixed set of labels (DEMMI, falls, palliative
/// phase) are typed enums, so an unknown label fails at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub details: AssessmentDetails,
    pub nursing: TechnicalNursing,
    pub rug_adl: RugAdl,
    pub akps: u8,
    pub palliative: PalliativeCare,
    pub frailty: Frailty,
    pub braden: Braden,
    pub demmi: Demmi,
    pub afm: Afm,
    pub brua: Brua,
}

impl AssessmentRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDetails {
    pub assessor_id: String,
    pub facility_id: String,
    pub resident_id: String,
    pub place_of_assessment: PlaceOfAssessment,
    pub date_of_assessment: jiff::civil::Date,
    #[serde(default)]
    pub start_time: Option<jiff::civil::Time>,
    #[serde(default)]
    pub end_time: Option<jiff::civil::Time>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlaceOfAssessment {
    Racf,
    Hospital,
    Home,
    Other,
}

/// The nine technical nursing requirements. Any one of them is a complex
/// nursing compounding factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TechnicalNursing {
    pub bariatric: bool,
    pub oxygen: bool,
    pub enteral_feeding: bool,
    pub tracheostomy: bool,
    pub catheter: bool,
    pub stoma: bool,
    pub peritoneal_dialysis: bool,
    pub daily_injections: bool,
    pub complex_wound_management: bool,
}

impl TechnicalNursing {
    /// Every requirement paired with its flag, in assessment-form order.
    pub fn flags(&self) -> [(NursingRequirement, bool); 9] {
        [
            (NursingRequirement::Bariatric, self.bariatric),
            (NursingRequirement::Oxygen, self.oxygen),
            (NursingRequirement::EnteralFeeding, self.enteral_feeding),
            (NursingRequirement::Tracheostomy, self.tracheostomy),
            (NursingRequirement::Catheter, self.catheter),
            (NursingRequirement::Stoma, self.stoma),
            (NursingRequirement::PeritonealDialysis, self.peritoneal_dialysis),
            (NursingRequirement::DailyInjections, self.daily_injections),
            (
                NursingRequirement::ComplexWoundManagement,
                self.complex_wound_management,
            ),
        ]
    }

    pub fn active(&self) -> Vec<NursingRequirement> {
        self.flags()
            .into_iter()
            .filter_map(|(req, on)| on.then_some(req))
            .collect()
    }

    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, on)| *on)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NursingRequirement {
    Bariatric,
    Oxygen,
    EnteralFeeding,
    Tracheostomy,
    Catheter,
    Stoma,
    PeritonealDialysis,
    DailyInjections,
    ComplexWoundManagement,
}

impl NursingRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            NursingRequirement::Bariatric => "Bariatric",
            NursingRequirement::Oxygen => "Oxygen",
            NursingRequirement::EnteralFeeding => "Enteral feeding",
            NursingRequirement::Tracheostomy => "Tracheostomy",
            NursingRequirement::Catheter => "Catheter",
            NursingRequirement::Stoma => "Stoma",
            NursingRequirement::PeritonealDialysis => "Peritoneal dialysis",
            NursingRequirement::DailyInjections => "Daily injections",
            NursingRequirement::ComplexWoundManagement => "Complex wound management",
        }
    }
}

/// RUG-ADL domain scores. Bed mobility, toileting and transfer take
/// 1, 3, 4 or 5; eating takes 1–3. Higher means more dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RugAdl {
    pub bed_mobility: u8,
    pub toileting: u8,
    pub transfer: u8,
    pub eating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PalliativeCare {
    pub entered_for_palliative: bool,
    pub prognosis_under_3_months: bool,
    pub existing_care_plan: bool,
    pub akps_40_or_less: bool,
    pub has_malignancy: bool,
    #[serde(default)]
    pub palliative_phase: Option<PalliativePhase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PalliativePhase {
    Stable,
    Unstable,
    Deteriorating,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Frailty {
    pub fall_history: FallHistory,
    #[serde(default)]
    pub fallen_in_last_4_weeks: bool,
    #[serde(default)]
    pub falls_in_last_4_weeks: u8,
    pub weight_loss_over_10_pct: bool,
    pub rockwood: u8,
}

/// Falls in the twelve months before assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FallHistory {
    None,
    #[serde(rename = "once_in_12_months")]
    OnceIn12Months,
    #[serde(rename = "multiple_in_12_months")]
    MultipleIn12Months,
}

/// Braden Scale sub-scores. Five domains take 1–4, friction/shear takes 1–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Braden {
    pub sensory_perception: u8,
    pub moisture: u8,
    pub activity: u8,
    pub mobility: u8,
    pub nutrition: u8,
    pub friction_shear: u8,
}

/// Modified de Morton Mobility Index answers, grouped by domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demmi {
    pub bed: DemmiBed,
    pub chair: DemmiChair,
    pub balance: DemmiBalance,
    pub walking: DemmiWalking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemmiBed {
    pub bridge: Achievement,
    pub roll_onto_side: Achievement,
    pub lying_to_sitting: AssistanceLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemmiChair {
    pub sit_unsupported: TimedHold,
    pub sit_to_stand: AssistanceLevel,
    pub sit_to_stand_no_arms: Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemmiBalance {
    pub stand_unsupported: TimedHold,
    pub stand_feet_together: TimedHold,
    pub stand_on_toes: TimedHold,
    pub tandem_stand_eyes_closed: TimedHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemmiWalking {
    pub distance: WalkingDistance,
    pub independence: WalkingIndependence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Achievement {
    Unable,
    Able,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssistanceLevel {
    Unable,
    MinAssist,
    Independent,
}

/// Static holds are scored on whether the position is held for 10 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TimedHold {
    Unable,
    TenSeconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WalkingDistance {
    Unable,
    #[serde(rename = "5m")]
    FiveMetres,
    #[serde(rename = "10m")]
    TenMetres,
    #[serde(rename = "20m")]
    TwentyMetres,
    #[serde(rename = "50m")]
    FiftyMetres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WalkingIndependence {
    Unable,
    MinAssist,
    IndependentWithAid,
    IndependentWithoutAid,
}

/// Australian Functional Measure. Every item is rated 1 (total assistance)
/// to 7 (complete independence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Afm {
    pub self_care: AfmSelfCare,
    pub sphincter_control: AfmSphincterControl,
    pub transfers: AfmTransfers,
    pub locomotion: AfmLocomotion,
    pub communication: AfmCommunication,
    pub social_cognition: AfmSocialCognition,
}

impl Afm {
    /// The twelve motor items keyed by field path.
    pub fn motor_items(&self) -> [(&'static str, u8); 12] {
        let s = &self.self_care;
        [
            ("afm.self_care.eating", s.eating),
            ("afm.self_care.grooming", s.grooming),
            ("afm.self_care.bathing", s.bathing),
            ("afm.self_care.dressing_upper", s.dressing_upper),
            ("afm.self_care.dressing_lower", s.dressing_lower),
            ("afm.self_care.toileting", s.toileting),
            ("afm.sphincter_control.bladder", self.sphincter_control.bladder),
            ("afm.sphincter_control.bowel", self.sphincter_control.bowel),
            (
                "afm.transfers.bed_chair_wheelchair",
                self.transfers.bed_chair_wheelchair,
            ),
            ("afm.transfers.toilet", self.transfers.toilet),
            ("afm.transfers.tub_shower", self.transfers.tub_shower),
            ("afm.locomotion.walk_wheelchair", self.locomotion.walk_wheelchair),
        ]
    }

    /// The five cognitive items keyed by field path.
    pub fn cognitive_items(&self) -> [(&'static str, u8); 5] {
        [
            ("afm.communication.comprehension", self.communication.comprehension),
            ("afm.communication.expression", self.communication.expression),
            (
                "afm.social_cognition.social_interaction",
                self.social_cognition.social_interaction,
            ),
            (
                "afm.social_cognition.problem_solving",
                self.social_cognition.problem_solving,
            ),
            ("afm.social_cognition.memory", self.social_cognition.memory),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AfmSelfCare {
    pub eating: u8,
    pub grooming: u8,
    pub bathing: u8,
    pub dressing_upper: u8,
    pub dressing_lower: u8,
    pub toileting: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AfmSphincterControl {
    pub bladder: u8,
    pub bowel: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AfmTransfers {
    pub bed_chair_wheelchair: u8,
    pub toilet: u8,
    pub tub_shower: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AfmLocomotion {
    pub walk_wheelchair: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AfmCommunication {
    pub comprehension: u8,
    pub expression: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AfmSocialCognition {
    pub social_interaction: u8,
    pub problem_solving: u8,
    pub memory: u8,
}

/// Behaviour Resource Utilisation Assessment. 1 = extensive monitoring and
/// supervision, 4 = not applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Brua {
    pub wandering: u8,
    pub verbally_disruptive: u8,
    pub physically_aggressive: u8,
    pub emotional_dependence: u8,
    pub danger_to_self_or_others: u8,
}

impl Brua {
    pub fn items(&self) -> [(&'static str, u8); 5] {
        [
            ("brua.wandering", self.wandering),
            ("brua.verbally_disruptive", self.verbally_disruptive),
            ("brua.physically_aggressive", self.physically_aggressive),
            ("brua.emotional_dependence", self.emotional_dependence),
            ("brua.danger_to_self_or_others", self.danger_to_self_or_others),
        ]
    }
}
