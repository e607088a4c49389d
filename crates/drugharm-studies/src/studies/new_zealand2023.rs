use std::sync::LazyLock;

use drugharm_core::models::criterion::{Criterion, CriterionKey, HarmCategory};
use drugharm_core::models::drug::{DrugClass, DrugScoreRecord};
use drugharm_core::models::study::{StudyId, StudyInfo};

use super::{criterion, score_table, ScoreRow};
use crate::schema::SchemaVariant;
use crate::Study;

/// Crossin et al. (2023). Scores the two mental impairment criteria as one and
/// adds non-physical (spiritual) harm to users and cultural harm to others.
/// Loss of relationships is not scored separately.
pub struct NewZealand2023;

impl Study for NewZealand2023 {
    fn id(&self) -> StudyId {
        StudyId::NewZealand2023
    }

    fn info(&self) -> &StudyInfo {
        static INFO: LazyLock<StudyInfo> = LazyLock::new(|| StudyInfo {
            name: "New Zealand 2023".to_string(),
            full_name: "Crossin et al. (2023)".to_string(),
            journal: "J Psychopharmacology".to_string(),
            link: "https://doi.org/10.1177/02698811231182012".to_string(),
            color: "#f97316".to_string(),
            description: "Most methodologically advanced study. Added culturally-relevant \
                          criteria including indigenous perspectives (non-physical/spiritual \
                          harm) and youth-specific harm analysis. Most recent data reflects \
                          current drug landscape."
                .to_string(),
            experts: 23,
            trust: 9,
        });
        &INFO
    }

    fn variant(&self) -> SchemaVariant {
        SchemaVariant::NewZealand
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: LazyLock<Vec<Criterion>> = LazyLock::new(|| {
            use CriterionKey::*;
            use HarmCategory::{Others, User};

            vec![
                criterion(
                    DrugSpecificMortality,
                    "Drug-specific mortality",
                    "Mortality (direct)",
                    "Intrinsic lethality expressed as ratio of lethal dose to standard dose",
                    5.4,
                    "#dc2626",
                    User,
                ),
                criterion(
                    DrugRelatedMortality,
                    "Drug-related mortality",
                    "Mortality (related)",
                    "Life shortened by drug use (accidents, cancers, HIV, suicide)",
                    6.1,
                    "#ef4444",
                    User,
                ),
                criterion(
                    DrugSpecificDamage,
                    "Drug-specific damage",
                    "Physical (direct)",
                    "Direct physical damage (cirrhosis, seizures, strokes, cardiomyopathy)",
                    4.3,
                    "#f97316",
                    User,
                ),
                criterion(
                    DrugRelatedDamage,
                    "Drug-related damage",
                    "Physical (related)",
                    "Indirect physical damage (blood-borne viruses, cutting agents, emphysema)",
                    3.9,
                    "#fb923c",
                    User,
                ),
                criterion(
                    Dependence,
                    "Dependence",
                    "Dependence",
                    "Propensity to continue use despite adverse consequences",
                    6.0,
                    "#eab308",
                    User,
                ),
                criterion(
                    MentalImpairment,
                    "Mental impairment",
                    "Mental",
                    "Direct and secondary mental effects (psychosis, intoxication, mood disorders)",
                    8.8,
                    "#a855f7",
                    User,
                ),
                criterion(
                    LossOfTangibles,
                    "Loss of tangibles",
                    "Loss tangibles",
                    "Loss of income, housing, job, educational achievements, criminal record",
                    4.6,
                    "#ec4899",
                    User,
                ),
                criterion(
                    NonPhysicalHarm,
                    "Non-physical harm",
                    "Non-physical",
                    "Spiritual harm and loss of connection to self, whānau and identity",
                    4.9,
                    "#f472b6",
                    User,
                ),
                criterion(
                    Injury,
                    "Injury",
                    "Injury",
                    "Violence, traffic accidents, fetal harm, drug waste",
                    10.8,
                    "#3b82f6",
                    Others,
                ),
                criterion(
                    Crime,
                    "Crime",
                    "Crime",
                    "Acquisitive crime volume at population level",
                    9.6,
                    "#60a5fa",
                    Others,
                ),
                criterion(
                    EnvironmentalDamage,
                    "Environmental damage",
                    "Environment",
                    "Toxic waste, discarded needles, local pollution",
                    3.1,
                    "#10b981",
                    Others,
                ),
                criterion(
                    FamilyAdversities,
                    "Family adversities",
                    "Family",
                    "Family breakdown, child neglect, economic/emotional wellbeing",
                    9.4,
                    "#06b6d4",
                    Others,
                ),
                criterion(
                    InternationalDamage,
                    "International damage",
                    "International",
                    "Deforestation, country destabilization, international crime",
                    2.9,
                    "#34d399",
                    Others,
                ),
                criterion(
                    EconomicCost,
                    "Economic cost",
                    "Economic",
                    "Healthcare, police, prisons, social services, lost productivity",
                    11.7,
                    "#6366f1",
                    Others,
                ),
                criterion(
                    Community,
                    "Community",
                    "Community",
                    "Social cohesion decline, reputation damage",
                    4.2,
                    "#22d3ee",
                    Others,
                ),
                criterion(
                    CulturalHarm,
                    "Cultural harm",
                    "Cultural",
                    "Harm to cultural identity, practices and collective wellbeing",
                    4.3,
                    "#14b8a6",
                    Others,
                ),
            ]
        });
        &CRITERIA
    }

    fn scores(&self) -> &[DrugScoreRecord] {
        static SCORES: LazyLock<Vec<DrugScoreRecord>> =
            LazyLock::new(|| score_table(ROWS, SchemaVariant::NewZealand));
        &SCORES
    }
}

#[rustfmt::skip]
const ROWS: &[ScoreRow] = &[
    //                                           users                                  | others
    ("Alcohol",                DrugClass::Depressant,   [2.0, 5.0, 5.0, 3.0, 4.0, 4.0, 3.0, 3.0, 9.0, 6.0, 1.0, 9.0, 1.0, 10.0, 4.0, 4.0]),
    ("Methamphetamine",        DrugClass::Stimulant,    [2.0, 3.0, 3.0, 3.0, 5.0, 7.0, 4.0, 4.0, 4.0, 6.0, 1.0, 6.0, 1.0,  4.0, 4.0, 4.0]),
    ("Synthetic Cannabinoids", DrugClass::Cannabinoid,  [4.0, 3.0, 2.0, 2.0, 4.0, 6.0, 3.0, 3.0, 2.0, 2.0, 0.0, 3.0, 1.0,  2.0, 2.0, 2.0]),
    ("Tobacco",                DrugClass::Other,        [1.0, 6.0, 4.0, 2.0, 4.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0,  4.0, 0.0, 1.0]),
    ("Heroin",                 DrugClass::Opioid,       [5.0, 5.0, 3.0, 4.0, 5.0, 5.0, 3.0, 3.0, 2.0, 4.0, 1.0, 3.0, 1.0,  2.0, 1.0, 1.0]),
    ("Fentanyl",               DrugClass::Opioid,       [6.0, 5.0, 2.0, 3.0, 5.0, 5.0, 3.0, 3.0, 2.0, 2.0, 1.0, 2.0, 2.0,  2.0, 1.0, 1.0]),
    ("Cocaine",                DrugClass::Stimulant,    [1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0, 2.0, 0.0, 1.0, 2.0,  1.0, 1.0, 0.0]),
    ("GHB",                    DrugClass::Depressant,   [3.0, 2.0, 2.0, 1.0, 2.0, 3.0, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.0,  0.0, 1.0, 0.0]),
    ("Cannabis",               DrugClass::Cannabinoid,  [0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0,  1.0, 1.0, 1.0]),
    ("Benzodiazepines",        DrugClass::Depressant,   [1.0, 2.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0,  1.0, 0.0, 0.0]),
    ("Prescription Opioids",   DrugClass::Opioid,       [2.0, 3.0, 1.0, 1.0, 4.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0,  1.0, 0.0, 0.0]),
    ("Ketamine",               DrugClass::Dissociative, [1.0, 1.0, 2.0, 1.0, 2.0, 3.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0]),
    ("Amphetamine",            DrugClass::Stimulant,    [1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 1.0, 1.0, 1.0, 2.0, 0.0, 1.0, 0.0,  1.0, 1.0, 0.0]),
    ("MDMA (Ecstasy)",         DrugClass::Stimulant,    [1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0]),
    ("Kava",                   DrugClass::Other,        [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0]),
    ("LSD",                    DrugClass::Psychedelic,  [0.0, 1.0, 0.0, 0.0, 1.0, 3.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0]),
    ("Psilocybin Mushrooms",   DrugClass::Psychedelic,  [0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0,  0.0, 0.0, 0.0]),
];
