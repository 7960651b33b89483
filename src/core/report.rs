use crate::config::{Config, FailOn, ReportConfig};
use crate::core::survey::{Field, Sex};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ConcernLevel {
    High,
    Moderate,
    Low,
    Good,
}

impl ConcernLevel {
    /// Grade a normalized risk contribution: the worst third of a scale is
    /// High, the middle third Moderate, anything above the healthiest
    /// answer Low.
    pub fn from_contribution(contribution: f64) -> Self {
        if contribution >= 2.0 / 3.0 {
            Self::High
        } else if contribution >= 1.0 / 3.0 {
            Self::Moderate
        } else if contribution > 0.0 {
            Self::Low
        } else {
            Self::Good
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
            Self::Good => "GOOD",
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::High => matches!(self, Self::High),
            FailOn::Moderate => matches!(self, Self::High | Self::Moderate),
        }
    }

    fn colored(self) -> String {
        match self {
            Self::High => self.as_str().red().bold().to_string(),
            Self::Moderate => self.as_str().yellow().bold().to_string(),
            Self::Low => self.as_str().blue().bold().to_string(),
            Self::Good => self.as_str().green().bold().to_string(),
        }
    }
}

/// One scored field's place in the report.
#[derive(Debug, Clone, Serialize)]
pub struct Concern {
    pub level: ConcernLevel,
    pub field: Field,
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<&'static str>,
    pub value: u8,
    pub advice: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Counts {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub good: usize,
    pub total: usize,
}

impl Counts {
    pub fn from_concerns(concerns: &[Concern]) -> Self {
        let mut counts = Self::default();
        for concern in concerns {
            match concern.level {
                ConcernLevel::High => counts.high += 1,
                ConcernLevel::Moderate => counts.moderate += 1,
                ConcernLevel::Low => counts.low += 1,
                ConcernLevel::Good => counts.good += 1,
            }
        }
        counts.total = concerns.len();
        counts
    }
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub fail_on: FailOn,
    pub max_score: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChildSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub score: u8,
    pub band: String,
    pub child: ChildSummary,
    pub counts: Counts,
    pub concerns: Vec<Concern>,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub score: u8,
    pub band: String,
    pub child: ChildSummary,
    pub counts: Counts,
    pub concerns: Vec<Concern>,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            score: report.score,
            band: report.band.clone(),
            child: report.child,
            counts: report.counts.clone(),
            concerns: report.concerns.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(score: u8, concerns: &[Concern], cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if score > cfg.general.max_score {
        reasons.push(format!(
            "score {} is above max_score {}",
            score, cfg.general.max_score
        ));
    }

    if cfg.general.fail_on != FailOn::None
        && concerns
            .iter()
            .any(|concern| concern.level.meets_fail_on(cfg.general.fail_on))
    {
        reasons.push(match cfg.general.fail_on {
            FailOn::Moderate => "found moderate-or-higher concerns".to_string(),
            FailOn::High => "found high concerns".to_string(),
            FailOn::None => String::new(),
        });
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &FinalReport, cfg: &ReportConfig) {
    println!("Lifestyle Risk Score: {}/100 ({})", report.score, report.band);

    match (report.child.sex, report.child.age) {
        (Some(sex), Some(age)) => println!("child: {}, age {}", sex, age),
        (Some(sex), None) => println!("child: {}", sex),
        (None, Some(age)) => println!("child: age {}", age),
        (None, None) => {}
    }

    let mut levels = vec![
        ConcernLevel::High,
        ConcernLevel::Moderate,
        ConcernLevel::Low,
    ];
    if cfg.show_positive {
        levels.push(ConcernLevel::Good);
    }

    for level in levels {
        let grouped: Vec<&Concern> = report
            .concerns
            .iter()
            .filter(|concern| concern.level == level)
            .collect();

        if grouped.is_empty() {
            continue;
        }

        println!();
        println!("{} ({})", level.colored(), grouped.len());

        for concern in grouped {
            println!("[{}] ({}) {}", level.as_str(), concern.field, concern.question);
            if let Some(answer) = concern.answer {
                println!("answer: {}", answer);
            }
            if cfg.advice && level != ConcernLevel::Good {
                println!("-> advice: {}", concern.advice);
            }
        }
    }

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

/// Prints every question with its ordered answer labels.
pub fn print_questionnaire() {
    for field in Field::ALL {
        println!("{} {}", field.to_string().bold(), field.question());
        for label_text in field.labels() {
            println!("  {}", label_text);
        }
        println!();
    }
}
