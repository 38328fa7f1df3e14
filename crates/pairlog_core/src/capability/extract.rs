//! Task-extraction capability.
//!
//! # Responsibility
//! - Declare the extraction seam used after a board message is posted.
//! - Provide `PhraseTaskExtractor`, the deterministic offline default.
//!
//! # Invariants
//! - Relative date phrases resolve against the supplied reference date,
//!   never against the capability's own clock.
//! - Extraction failure yields an empty list at the call site, not an error.

use crate::capability::CapabilityError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// One task recovered from free text, with its resolved calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractedTask {
    pub text: String,
    pub date: NaiveDate,
}

/// Extraction seam: message text plus reference date in, dated tasks out.
pub trait TaskExtractor {
    fn extract_tasks(
        &self,
        text: &str,
        reference_date: NaiveDate,
    ) -> Result<Vec<ExtractedTask>, CapabilityError>;
}

static DATE_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("(今天|今晚|明天|后天|(?:周|星期|礼拜)[一二三四五六日天])")
        .expect("valid date phrase regex")
});
static CLAUSE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[,，。．！!？?；;、\n]+").expect("valid clause split regex"));
static LEADING_FILLER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?:提醒我|提醒|记得|别忘了|我们|帮我|要)+").expect("valid filler regex"));

/// Deterministic extractor: splits the text into clauses and emits one task
/// per clause that names a relative day. Clauses without a date phrase are
/// skipped; a generative backend may recover more.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhraseTaskExtractor;

impl TaskExtractor for PhraseTaskExtractor {
    fn extract_tasks(
        &self,
        text: &str,
        reference_date: NaiveDate,
    ) -> Result<Vec<ExtractedTask>, CapabilityError> {
        let mut tasks = Vec::new();
        for clause in CLAUSE_SPLIT_RE.split(text) {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            let Some(found) = DATE_PHRASE_RE.find(clause) else {
                continue;
            };
            let Some(date) = resolve_phrase(found.as_str(), reference_date) else {
                continue;
            };
            let remainder = format!("{}{}", &clause[..found.start()], &clause[found.end()..]);
            let task_text = LEADING_FILLER_RE.replace(remainder.trim(), "");
            let task_text = task_text.trim();
            if task_text.is_empty() {
                continue;
            }
            tasks.push(ExtractedTask {
                text: task_text.to_string(),
                date,
            });
        }
        Ok(tasks)
    }
}

/// Resolves one matched phrase against the reference date.
///
/// Weekday names resolve to the next upcoming occurrence, always strictly
/// after the reference date.
fn resolve_phrase(phrase: &str, reference_date: NaiveDate) -> Option<NaiveDate> {
    match phrase {
        "今天" | "今晚" => Some(reference_date),
        "明天" => reference_date.checked_add_days(Days::new(1)),
        "后天" => reference_date.checked_add_days(Days::new(2)),
        weekday_phrase => {
            let target = parse_weekday(weekday_phrase.chars().last()?)?;
            let mut ahead = (u64::from(target.num_days_from_monday()) + 7
                - u64::from(reference_date.weekday().num_days_from_monday()))
                % 7;
            if ahead == 0 {
                ahead = 7;
            }
            reference_date.checked_add_days(Days::new(ahead))
        }
    }
}

fn parse_weekday(symbol: char) -> Option<Weekday> {
    match symbol {
        '一' => Some(Weekday::Mon),
        '二' => Some(Weekday::Tue),
        '三' => Some(Weekday::Wed),
        '四' => Some(Weekday::Thu),
        '五' => Some(Weekday::Fri),
        '六' => Some(Weekday::Sat),
        '日' | '天' => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{PhraseTaskExtractor, TaskExtractor};
    use chrono::NaiveDate;

    fn day(text: &str) -> NaiveDate {
        text.parse().expect("valid test date")
    }

    fn extract(text: &str, reference: &str) -> Vec<(String, NaiveDate)> {
        PhraseTaskExtractor
            .extract_tasks(text, day(reference))
            .expect("extraction is infallible")
            .into_iter()
            .map(|task| (task.text, task.date))
            .collect()
    }

    #[test]
    fn today_and_tonight_resolve_to_the_reference_date() {
        assert_eq!(
            extract("今天取快递", "2024-03-01"),
            vec![("取快递".to_string(), day("2024-03-01"))]
        );
        assert_eq!(
            extract("今晚一起做饭", "2024-03-01"),
            vec![("一起做饭".to_string(), day("2024-03-01"))]
        );
    }

    #[test]
    fn tomorrow_and_day_after_add_offsets() {
        assert_eq!(
            extract("提醒我明天买花", "2024-03-01"),
            vec![("买花".to_string(), day("2024-03-02"))]
        );
        assert_eq!(
            extract("后天交水电费", "2024-03-01"),
            vec![("交水电费".to_string(), day("2024-03-03"))]
        );
    }

    #[test]
    fn weekday_resolves_to_the_next_upcoming_occurrence() {
        // 2024-03-01 was a Friday; the next Wednesday is 2024-03-06.
        assert_eq!(
            extract("周三去体检", "2024-03-01"),
            vec![("去体检".to_string(), day("2024-03-06"))]
        );
        // Same weekday as the reference date resolves a full week ahead.
        assert_eq!(
            extract("星期五纪念日晚餐", "2024-03-01"),
            vec![("纪念日晚餐".to_string(), day("2024-03-08"))]
        );
        assert_eq!(
            extract("礼拜天大扫除", "2024-03-01"),
            vec![("大扫除".to_string(), day("2024-03-03"))]
        );
    }

    #[test]
    fn multiple_clauses_yield_multiple_tasks() {
        let tasks = extract("明天买花，周日给爸妈打电话", "2024-03-01");
        assert_eq!(
            tasks,
            vec![
                ("买花".to_string(), day("2024-03-02")),
                ("给爸妈打电话".to_string(), day("2024-03-03")),
            ]
        );
    }

    #[test]
    fn text_without_date_phrases_yields_nothing() {
        assert!(extract("记得多喝水", "2024-03-01").is_empty());
    }
}
