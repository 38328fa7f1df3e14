//! Conflict-judge capability.

use crate::capability::CapabilityError;
use crate::model::conflict::Verdict;
use log::warn;

/// Judge seam: both sides' points in, a structured verdict out.
pub trait ConflictJudge {
    fn judge(
        &self,
        reason: &str,
        his_point: &str,
        her_point: &str,
    ) -> Result<Verdict, CapabilityError>;
}

/// Stock verdict substituted whenever the judge capability fails: even
/// fault split plus conciliatory boilerplate.
pub fn fallback_verdict() -> Verdict {
    Verdict {
        his_fault: 50,
        her_fault: 50,
        analysis: "这次就算打平吧，小吵小闹也是感情的一部分。".to_string(),
        advice: "先抱抱对方，等气消了再把话慢慢说开。".to_string(),
        prevention: "下次有情绪就早点说出来，别攒成大问题。".to_string(),
    }
}

/// Invokes the judge and degrades to `fallback_verdict` on any failure; the
/// error never reaches the caller.
pub fn judge_or_fallback<J: ConflictJudge + ?Sized>(
    judge: &J,
    reason: &str,
    his_point: &str,
    her_point: &str,
) -> Verdict {
    match judge.judge(reason, his_point, her_point) {
        Ok(verdict) => verdict,
        Err(err) => {
            warn!("event=conflict_judge module=capability status=fallback error={err}");
            fallback_verdict()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fallback_verdict, judge_or_fallback, ConflictJudge};
    use crate::capability::CapabilityError;
    use crate::model::conflict::Verdict;

    struct RefusingJudge;

    impl ConflictJudge for RefusingJudge {
        fn judge(&self, _: &str, _: &str, _: &str) -> Result<Verdict, CapabilityError> {
            Err(CapabilityError::InvalidResponse("truncated".to_string()))
        }
    }

    #[test]
    fn failure_degrades_to_even_split() {
        let verdict = judge_or_fallback(&RefusingJudge, "dishes", "his", "her");
        assert_eq!(verdict, fallback_verdict());
        assert_eq!((verdict.his_fault, verdict.her_fault), (50, 50));
    }
}
