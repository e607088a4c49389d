use std::sync::LazyLock;

use drugharm_core::models::criterion::Criterion;
use drugharm_core::models::drug::{DrugClass, DrugScoreRecord};
use drugharm_core::models::study::{StudyId, StudyInfo};

use super::{score_table, uk2010, ScoreRow};
use crate::schema::SchemaVariant;
use crate::Study;

/// Bonomo et al. (2019). An Australian replication on the standard sixteen
/// criteria, with a drug list reflecting local use (fentanyl, synthetic
/// cannabinoids, prescription opioids).
pub struct Australia2019;

impl Study for Australia2019 {
    fn id(&self) -> StudyId {
        StudyId::Australia2019
    }

    fn info(&self) -> &StudyInfo {
        static INFO: LazyLock<StudyInfo> = LazyLock::new(|| StudyInfo {
            name: "Australia 2019".to_string(),
            full_name: "Bonomo et al. (2019)".to_string(),
            journal: "J Psychopharmacology".to_string(),
            link: "https://doi.org/10.1177/0269881119841569".to_string(),
            color: "#22c55e".to_string(),
            description: "Rigorous MCDA replication with diverse Australian experts. Added \
                          supplementary prevalence-adjusted analysis to account for local \
                          usage patterns. High methodological quality."
                .to_string(),
            experts: 25,
            trust: 9,
        });
        &INFO
    }

    fn variant(&self) -> SchemaVariant {
        SchemaVariant::Standard
    }

    fn criteria(&self) -> &[Criterion] {
        uk2010::standard_criteria()
    }

    fn scores(&self) -> &[DrugScoreRecord] {
        static SCORES: LazyLock<Vec<DrugScoreRecord>> =
            LazyLock::new(|| score_table(ROWS, SchemaVariant::Standard));
        &SCORES
    }
}

#[rustfmt::skip]
const ROWS: &[ScoreRow] = &[
    //                                           users                                           | others
    ("Alcohol",                DrugClass::Depressant,   [2.0, 5.0, 5.0, 2.0, 4.0, 2.0, 2.0, 2.0, 2.0, 7.0, 6.0, 2.0, 8.0, 1.0, 7.0, 6.0]),
    ("Methamphetamine",        DrugClass::Stimulant,    [2.0, 4.0, 3.0, 3.0, 5.0, 5.0, 4.0, 4.0, 4.0, 4.0, 5.0, 1.0, 5.0, 1.0, 4.0, 3.0]),
    ("Heroin",                 DrugClass::Opioid,       [5.0, 5.0, 3.0, 4.0, 5.0, 3.0, 3.0, 3.0, 3.0, 2.0, 5.0, 2.0, 4.0, 2.0, 3.0, 1.0]),
    ("Fentanyl",               DrugClass::Opioid,       [6.0, 5.0, 2.0, 3.0, 5.0, 3.0, 3.0, 3.0, 3.0, 2.0, 3.0, 1.0, 3.0, 2.0, 2.0, 1.0]),
    ("Tobacco",                DrugClass::Other,        [1.0, 6.0, 4.0, 2.0, 4.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 4.0, 0.0]),
    ("Cocaine",                DrugClass::Stimulant,    [2.0, 2.0, 2.0, 2.0, 3.0, 2.0, 2.0, 2.0, 1.0, 2.0, 2.0, 0.0, 2.0, 3.0, 1.0, 1.0]),
    ("Cannabis",               DrugClass::Cannabinoid,  [0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 2.0, 1.0]),
    ("Synthetic Cannabinoids", DrugClass::Cannabinoid,  [2.0, 2.0, 2.0, 1.0, 2.0, 3.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
    ("Benzodiazepines",        DrugClass::Depressant,   [1.0, 2.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]),
    ("GHB",                    DrugClass::Depressant,   [3.0, 2.0, 2.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
    ("Amphetamine",            DrugClass::Stimulant,    [1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.0, 1.0, 0.0]),
    ("Prescription Opioids",   DrugClass::Opioid,       [2.0, 3.0, 1.0, 1.0, 4.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 2.0, 0.0, 2.0, 0.0]),
    ("Methadone",              DrugClass::Opioid,       [3.0, 2.0, 1.0, 1.0, 3.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
    ("Ketamine",               DrugClass::Dissociative, [1.0, 1.0, 2.0, 1.0, 2.0, 3.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
    ("Buprenorphine",          DrugClass::Opioid,       [1.0, 1.0, 1.0, 1.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
    ("MDMA (Ecstasy)",         DrugClass::Stimulant,    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    ("LSD",                    DrugClass::Psychedelic,  [0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    ("Psilocybin Mushrooms",   DrugClass::Psychedelic,  [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
];
