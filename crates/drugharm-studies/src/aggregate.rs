use std::sync::LazyLock;

use serde::Serialize;
use ts_rs::TS;

use drugharm_core::models::aggregate::AggregateScoreRow;
use drugharm_core::models::drug::DrugClass;
use drugharm_core::models::study::StudyId;

/// Spread above which a drug's scores are considered to disagree across studies.
pub const DIVERGENCE_THRESHOLD: f64 = 4.0;

/// One entry of a single-study ranking built from the aggregate table.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RankedDrug {
    pub drug: String,
    pub class: DrugClass,
    pub score: f64,
}

/// One row of the four-study aggregate comparison.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AggregateComparison {
    #[serde(flatten)]
    pub row: AggregateScoreRow,
    pub average: f64,
    pub range: f64,
    /// The studies disagree by more than [`DIVERGENCE_THRESHOLD`].
    pub divergent: bool,
}

/// Harm-to-users scores (0–100) for every study, in source order.
pub fn aggregate_table() -> &'static [AggregateScoreRow] {
    static TABLE: LazyLock<Vec<AggregateScoreRow>> = LazyLock::new(|| {
        ROWS.iter()
            .map(|&(drug, class, [uk2010, australia2019, newzealand2023, europe2015])| {
                AggregateScoreRow {
                    drug: drug.to_string(),
                    class,
                    uk2010,
                    australia2019,
                    newzealand2023,
                    europe2015,
                }
            })
            .collect()
    });
    &TABLE
}

/// Drugs ordered by `study`'s aggregate score, highest first. Ties keep source order.
pub fn aggregate_ranking(study: StudyId) -> Vec<RankedDrug> {
    let mut ranked: Vec<RankedDrug> = aggregate_table()
        .iter()
        .map(|row| RankedDrug {
            drug: row.drug.clone(),
            class: row.class,
            score: row.score(study),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Every aggregate row with its mean and spread, ordered by mean, highest first.
pub fn aggregate_comparison() -> Vec<AggregateComparison> {
    let mut rows: Vec<AggregateComparison> = aggregate_table()
        .iter()
        .map(|row| {
            let range = row.range();
            AggregateComparison {
                row: row.clone(),
                average: row.average(),
                range,
                divergent: range > DIVERGENCE_THRESHOLD,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.average.total_cmp(&a.average));
    rows
}

#[rustfmt::skip]
const ROWS: &[(&str, DrugClass, [f64; 4])] = &[
    //                                                  uk    aus   nz    eu
    ("Heroin",               DrugClass::Opioid,       [34.0, 36.0, 38.0, 33.0]),
    ("Crack Cocaine",        DrugClass::Stimulant,    [37.0, 34.0, 35.0, 35.0]),
    ("Methamphetamine",      DrugClass::Stimulant,    [32.0, 33.0, 36.0, 30.0]),
    ("Alcohol",              DrugClass::Depressant,   [26.0, 29.0, 27.0, 25.0]),
    ("Cocaine",              DrugClass::Stimulant,    [27.0, 25.0, 24.0, 26.0]),
    ("Tobacco",              DrugClass::Other,        [26.0, 24.0, 22.0, 23.0]),
    ("Amphetamine",          DrugClass::Stimulant,    [23.0, 21.0, 22.0, 20.0]),
    ("Cannabis",             DrugClass::Cannabinoid,  [20.0, 18.0, 16.0, 17.0]),
    ("GHB",                  DrugClass::Depressant,   [18.0, 16.0, 15.0, 16.0]),
    ("Benzodiazepines",      DrugClass::Depressant,   [15.0, 17.0, 18.0, 14.0]),
    ("Ketamine",             DrugClass::Dissociative, [15.0, 14.0, 13.0, 13.0]),
    ("Methadone",            DrugClass::Opioid,       [14.0, 15.0, 14.0, 13.0]),
    ("Mephedrone",           DrugClass::Stimulant,    [13.0, 12.0, 11.0, 12.0]),
    ("Anabolic Steroids",    DrugClass::Other,        [10.0,  9.0,  8.0,  9.0]),
    ("MDMA (Ecstasy)",       DrugClass::Stimulant,    [ 9.0,  8.0,  9.0,  8.0]),
    ("Khat",                 DrugClass::Stimulant,    [ 9.0,  7.0,  6.0,  8.0]),
    ("LSD",                  DrugClass::Psychedelic,  [ 7.0,  6.0,  5.0,  6.0]),
    ("Buprenorphine",        DrugClass::Opioid,       [ 8.0,  9.0,  8.0,  7.0]),
    ("Psilocybin Mushrooms", DrugClass::Psychedelic,  [ 5.0,  4.0,  4.0,  5.0]),
];
