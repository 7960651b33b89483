pub mod error;
pub mod label;
pub mod report;
pub mod score;
pub mod survey;

use crate::config::Config;
use crate::core::error::ValidationError;
use crate::core::report::{
    ChildSummary, Concern, ConcernLevel, ConfigSummary, Counts, FinalReport,
};
use crate::core::survey::{AnswersFile, Field, SurveyRecord};
use anyhow::Result;

/// Runs one submission through the whole pipeline: resolve answers into a
/// record, score it, grade each field, and assemble the report.
pub fn evaluate(answers: &AnswersFile, cfg: &Config) -> Result<FinalReport> {
    let record = answers.to_record()?;
    let risk_score = score::compute_risk_score(&record)?;
    let band = score::band_for_score(risk_score).to_string();

    let mut concerns = build_concerns(&record)?;
    sort_concerns(&mut concerns);

    let counts = Counts::from_concerns(&concerns);
    let exit = report::evaluate_exit(risk_score, &concerns, cfg);

    Ok(FinalReport {
        score: risk_score,
        band,
        child: ChildSummary {
            sex: record.sex,
            age: record.age,
        },
        counts,
        concerns,
        config: ConfigSummary {
            fail_on: cfg.general.fail_on,
            max_score: cfg.general.max_score,
        },
        exit,
    })
}

fn build_concerns(record: &SurveyRecord) -> Result<Vec<Concern>, ValidationError> {
    Field::ALL
        .iter()
        .map(|&field| {
            let contribution = score::risk_contribution(record, field)?;
            Ok(Concern {
                level: ConcernLevel::from_contribution(contribution),
                field,
                question: field.question(),
                answer: record.label_of(field),
                value: record.value_of(field),
                advice: field.advice(),
            })
        })
        .collect()
}

fn sort_concerns(concerns: &mut [Concern]) {
    concerns.sort_by(|a, b| {
        level_rank(a.level)
            .cmp(&level_rank(b.level))
            .then(a.field.to_string().cmp(&b.field.to_string()))
    });
}

fn level_rank(level: ConcernLevel) -> u8 {
    match level {
        ConcernLevel::High => 0,
        ConcernLevel::Moderate => 1,
        ConcernLevel::Low => 2,
        ConcernLevel::Good => 3,
    }
}
