use std::sync::LazyLock;

use drugharm_core::models::criterion::{Criterion, CriterionKey, HarmCategory};
use drugharm_core::models::drug::{DrugClass, DrugScoreRecord};
use drugharm_core::models::study::{StudyId, StudyInfo};

use super::{criterion, score_table, ScoreRow};
use crate::schema::SchemaVariant;
use crate::Study;

/// Nutt et al. (2010), The Lancet. Sixteen criteria scored by a UK expert
/// panel with swing weighting. Scores estimated from Figure 4 of the paper.
pub struct Uk2010;

impl Study for Uk2010 {
    fn id(&self) -> StudyId {
        StudyId::Uk2010
    }

    fn info(&self) -> &StudyInfo {
        static INFO: LazyLock<StudyInfo> = LazyLock::new(|| StudyInfo {
            name: "UK 2010".to_string(),
            full_name: "Nutt et al. (2010)".to_string(),
            journal: "The Lancet".to_string(),
            link: "https://doi.org/10.1016/S0140-6736(10)61462-6".to_string(),
            color: "#6366f1".to_string(),
            description: "The foundational gold-standard MCDA study. Used 16 harm criteria \
                          with swing weighting. Published in The Lancet (highest impact \
                          factor). Most cited drug harm ranking study."
                .to_string(),
            experts: 15,
            trust: 10,
        });
        &INFO
    }

    fn variant(&self) -> SchemaVariant {
        SchemaVariant::Standard
    }

    fn criteria(&self) -> &[Criterion] {
        standard_criteria()
    }

    fn scores(&self) -> &[DrugScoreRecord] {
        static SCORES: LazyLock<Vec<DrugScoreRecord>> =
            LazyLock::new(|| score_table(ROWS, SchemaVariant::Standard));
        &SCORES
    }
}

/// The sixteen Nutt et al. criteria. Shared by every study that uses the
/// standard schema, so they all hand out the same slice.
pub(crate) fn standard_criteria() -> &'static [Criterion] {
    static CRITERIA: LazyLock<Vec<Criterion>> = LazyLock::new(|| {
        use CriterionKey::*;
        use HarmCategory::{Others, User};

        vec![
            // Harm to users: 9 criteria, cumulative weight 46
            criterion(
                DrugSpecificMortality,
                "Drug-specific mortality",
                "Mortality (direct)",
                "Intrinsic lethality expressed as ratio of lethal dose to standard dose",
                5.1,
                "#dc2626",
                User,
            ),
            criterion(
                DrugRelatedMortality,
                "Drug-related mortality",
                "Mortality (related)",
                "Life shortened by drug use (accidents, cancers, HIV, suicide)",
                6.4,
                "#ef4444",
                User,
            ),
            criterion(
                DrugSpecificDamage,
                "Drug-specific damage",
                "Physical (direct)",
                "Direct physical damage (cirrhosis, seizures, strokes, cardiomyopathy)",
                4.1,
                "#f97316",
                User,
            ),
            criterion(
                DrugRelatedDamage,
                "Drug-related damage",
                "Physical (related)",
                "Indirect physical damage (blood-borne viruses, cutting agents, emphysema)",
                4.1,
                "#fb923c",
                User,
            ),
            criterion(
                Dependence,
                "Dependence",
                "Dependence",
                "Propensity to continue use despite adverse consequences",
                5.7,
                "#eab308",
                User,
            ),
            criterion(
                DrugSpecificMentalImpairment,
                "Drug-specific mental impairment",
                "Mental (direct)",
                "Direct mental effects (psychosis, intoxication)",
                5.7,
                "#a855f7",
                User,
            ),
            criterion(
                DrugRelatedMentalImpairment,
                "Drug-related mental impairment",
                "Mental (related)",
                "Secondary mental effects (mood disorders from lifestyle)",
                5.7,
                "#c084fc",
                User,
            ),
            criterion(
                LossOfTangibles,
                "Loss of tangibles",
                "Loss tangibles",
                "Loss of income, housing, job, educational achievements, criminal record",
                4.5,
                "#ec4899",
                User,
            ),
            criterion(
                LossOfRelationships,
                "Loss of relationships",
                "Loss relationships",
                "Loss of family and friend relationships",
                4.5,
                "#f472b6",
                User,
            ),
            // Harm to others: 7 criteria, cumulative weight 54
            criterion(
                Injury,
                "Injury",
                "Injury",
                "Violence, traffic accidents, fetal harm, drug waste",
                11.5,
                "#3b82f6",
                Others,
            ),
            criterion(
                Crime,
                "Crime",
                "Crime",
                "Acquisitive crime volume at population level",
                10.2,
                "#60a5fa",
                Others,
            ),
            criterion(
                EnvironmentalDamage,
                "Environmental damage",
                "Environment",
                "Toxic waste, discarded needles, local pollution",
                3.8,
                "#10b981",
                Others,
            ),
            criterion(
                FamilyAdversities,
                "Family adversities",
                "Family",
                "Family breakdown, child neglect, economic/emotional wellbeing",
                8.9,
                "#06b6d4",
                Others,
            ),
            criterion(
                InternationalDamage,
                "International damage",
                "International",
                "Deforestation, country destabilization, international crime",
                3.8,
                "#34d399",
                Others,
            ),
            criterion(
                EconomicCost,
                "Economic cost",
                "Economic",
                "Healthcare, police, prisons, social services, lost productivity",
                12.8,
                "#6366f1",
                Others,
            ),
            criterion(
                Community,
                "Community",
                "Community",
                "Social cohesion decline, reputation damage",
                3.2,
                "#22d3ee",
                Others,
            ),
        ]
    });
    &CRITERIA
}

// Totals match the paper: Alcohol 72, Heroin 55, Crack Cocaine 54.
#[rustfmt::skip]
const ROWS: &[ScoreRow] = &[
    //                                           users                                           | others
    ("Alcohol",              DrugClass::Depressant,   [2.0, 5.0, 5.0, 2.0, 4.0, 2.0, 2.0, 2.0, 2.0, 11.0, 8.0, 1.0, 8.0, 1.0, 14.0, 3.0]),
    ("Heroin",               DrugClass::Opioid,       [5.0, 5.0, 3.0, 4.0, 5.0, 3.0, 3.0, 3.0, 3.0,  3.0, 6.0, 2.0, 4.0, 2.0,  3.0, 1.0]),
    ("Crack Cocaine",        DrugClass::Stimulant,    [3.0, 4.0, 3.0, 4.0, 5.0, 5.0, 4.0, 5.0, 4.0,  4.0, 5.0, 1.0, 3.0, 1.0,  2.0, 1.0]),
    ("Methamphetamine",      DrugClass::Stimulant,    [2.0, 3.0, 3.0, 3.0, 5.0, 5.0, 4.0, 4.0, 3.0,  0.0, 0.0, 1.0, 0.0, 0.0,  0.0, 0.0]),
    ("Cocaine",              DrugClass::Stimulant,    [1.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 2.0, 1.0,  2.0, 2.0, 0.0, 2.0, 2.0,  1.0, 1.0]),
    ("Tobacco",              DrugClass::Other,        [1.0, 6.0, 4.0, 2.0, 4.0, 0.0, 1.0, 1.0, 1.0,  1.0, 0.0, 1.0, 1.0, 0.0,  3.0, 0.0]),
    ("Amphetamine",          DrugClass::Stimulant,    [1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0,  1.0, 2.0, 1.0, 1.0, 0.0,  1.0, 0.0]),
    ("Cannabis",             DrugClass::Cannabinoid,  [0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 1.0, 0.0,  1.0, 1.0, 0.0, 2.0, 1.0,  3.0, 1.0]),
    ("GHB",                  DrugClass::Depressant,   [3.0, 2.0, 2.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0,  2.0, 1.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("Benzodiazepines",      DrugClass::Depressant,   [1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.0,  2.0, 1.0, 0.0, 1.0, 0.0,  1.0, 0.0]),
    ("Ketamine",             DrugClass::Dissociative, [1.0, 1.0, 2.0, 1.0, 2.0, 3.0, 1.0, 1.0, 0.0,  1.0, 1.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("Methadone",            DrugClass::Opioid,       [3.0, 2.0, 1.0, 1.0, 2.0, 0.0, 1.0, 1.0, 0.0,  1.0, 1.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("Mephedrone",           DrugClass::Stimulant,    [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.0,  1.0, 1.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("Butane",               DrugClass::Other,        [4.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0,  0.0, 0.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("Khat",                 DrugClass::Stimulant,    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0, 0.0,  1.0, 0.0]),
    ("Anabolic Steroids",    DrugClass::Other,        [0.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0,  1.0, 0.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("MDMA (Ecstasy)",       DrugClass::Stimulant,    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0,  1.0, 0.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("LSD",                  DrugClass::Psychedelic,  [0.0, 1.0, 0.0, 1.0, 1.0, 2.0, 1.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0, 0.0,  0.0, 0.0]),
    ("Buprenorphine",        DrugClass::Opioid,       [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 0.0, 1.0, 0.0,  0.0, 0.0]),
    ("Psilocybin Mushrooms", DrugClass::Psychedelic,  [0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 1.0, 0.0, 0.0,  1.0, 0.0, 0.0, 0.0, 0.0,  0.0, 0.0]),
];
