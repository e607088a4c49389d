use std::sync::LazyLock;

use drugharm_core::models::criterion::Criterion;
use drugharm_core::models::drug::DrugScoreRecord;
use drugharm_core::models::study::{StudyId, StudyInfo};

use crate::schema::SchemaVariant;
use crate::Study;

/// van Amsterdam et al. (2015). Only aggregate scores were published, so this
/// study has no criteria and no score table.
pub struct Europe2015;

impl Study for Europe2015 {
    fn id(&self) -> StudyId {
        StudyId::Europe2015
    }

    fn info(&self) -> &StudyInfo {
        static INFO: LazyLock<StudyInfo> = LazyLock::new(|| StudyInfo {
            name: "Europe 2015".to_string(),
            full_name: "van Amsterdam et al. (2015)".to_string(),
            journal: "J Psychopharmacology".to_string(),
            link: "https://doi.org/10.1177/0269881115581980".to_string(),
            color: "#ec4899".to_string(),
            description: "EU-wide expert panel providing international perspective. Results \
                          validated against original UK panel with high correlation (r=0.93). \
                          Demonstrates cross-cultural consistency of harm rankings across \
                          Western nations."
                .to_string(),
            experts: 20,
            trust: 7,
        });
        &INFO
    }

    fn variant(&self) -> SchemaVariant {
        SchemaVariant::Standard
    }

    fn criteria(&self) -> &[Criterion] {
        &[]
    }

    fn scores(&self) -> &[DrugScoreRecord] {
        &[]
    }
}
