//! Keyword classifier turning free text into categorized tasks.
//!
//! Each non-empty, non-comment line of the input becomes one task. The line
//! is matched case-insensitively against an ordered rule table; the first rule
//! with a keyword contained in the line decides domain, priority and estimate.

use crate::{CoreError, CoreResult, Domain, Task};

/// Lines starting with this marker are comments.
const COMMENT_PREFIX: char = '#';

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub domain: Domain,
    pub priority: i64,
    pub estimated_minutes: i64,
    pub keywords: &'static [&'static str],
}

/// Rules in evaluation order. Keywords must be lowercase.
pub const RULES: [Rule; 4] = [
    Rule {
        domain: Domain::Academic,
        priority: 2,
        estimated_minutes: 60,
        keywords: &["学习", "研究", "论文", "课程", "学术"],
    },
    Rule {
        domain: Domain::Income,
        priority: 1,
        estimated_minutes: 45,
        keywords: &["工作", "赚钱", "收入", "项目", "客户"],
    },
    Rule {
        domain: Domain::Growth,
        priority: 2,
        estimated_minutes: 40,
        keywords: &["锻炼", "阅读", "技能", "成长", "练习"],
    },
    Rule {
        domain: Domain::Life,
        priority: 3,
        estimated_minutes: 25,
        keywords: &["生活", "购物", "清洁", "家务", "娱乐", "散步", "走走"],
    },
];

/// Outcome when no rule matches.
pub const FALLBACK: Classification = Classification {
    domain: Domain::Life,
    priority: 3,
    estimated_minutes: 30,
};

/// Fixed insights reported with every batch, before the count line.
pub const INSIGHTS: [&str; 3] = [
    "🤖 Task types recognized automatically",
    "⏰ Time estimated automatically",
    "📊 Sorted by priority",
];

/// Domain, priority and estimate assigned to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub domain: Domain,
    pub priority: i64,
    pub estimated_minutes: i64,
}

impl From<&Rule> for Classification {
    fn from(rule: &Rule) -> Self {
        Self {
            domain: rule.domain,
            priority: rule.priority,
            estimated_minutes: rule.estimated_minutes,
        }
    }
}

/// Classify a single line.
pub fn classify_line(line: &str) -> Classification {
    let lowered = line.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(Classification::from)
        .unwrap_or(FALLBACK)
}

/// Lines of `input` that become tasks: trimmed, non-empty, not comments.
pub fn task_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
}

/// Turn a block of text into pending tasks, one per task line, in input
/// order.
///
/// Fails with [`CoreError::InvalidInput`] when the text is blank.
pub fn classify_text(input: &str) -> CoreResult<Vec<Task>> {
    if input.trim().is_empty() {
        return Err(CoreError::invalid_input("input must not be empty"));
    }

    Ok(task_lines(input)
        .map(|line| {
            let c = classify_line(line);
            Task::new(line)
                .with_domain(c.domain)
                .with_effort(c.priority, c.estimated_minutes)
        })
        .collect())
}

/// Insight strings for a processed batch of `count` tasks.
pub fn insights(count: usize) -> Vec<String> {
    INSIGHTS
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(format!("✅ {count} tasks processed")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_batch() {
        let tasks = classify_text("学习数学\n工作赚钱\n随便走走\n# comment\n").unwrap();

        assert_eq!(tasks.len(), 3);
        let domains: Vec<Domain> = tasks.iter().map(|t| t.domain).collect();
        let priorities: Vec<i64> = tasks.iter().map(|t| t.priority).collect();
        let minutes: Vec<i64> = tasks.iter().map(|t| t.estimated_minutes).collect();

        assert_eq!(domains, [Domain::Academic, Domain::Income, Domain::Life]);
        assert_eq!(priorities, [2, 1, 3]);
        assert_eq!(minutes, [60, 45, 25]);
        assert_eq!(tasks[0].title, "学习数学");
        assert!(tasks.iter().all(|t| t.status.as_str() == "pending"));
        assert!(tasks.iter().all(|t| t.completed_at.is_none() && t.actual_minutes.is_none()));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Contains both an academic and an income keyword.
        let c = classify_line("研究项目预算");
        assert_eq!(c.domain, Domain::Academic);
        assert_eq!(c.priority, 2);
    }

    #[test]
    fn test_english_lines_fall_back() {
        for line in ["Do homework", "Morning workout", "Fix home network"] {
            assert_eq!(classify_line(line), FALLBACK, "{line}");
        }
    }

    #[test]
    fn test_keyword_inside_mixed_text() {
        assert_eq!(classify_line("Week 3 课程 review").domain, Domain::Academic);
        assert_eq!(classify_line("call 客户 at 5").domain, Domain::Income);
    }

    #[test]
    fn test_unmatched_line_falls_back() {
        assert_eq!(classify_line("随便"), FALLBACK);
        assert_eq!(classify_line("zzz"), FALLBACK);
    }

    #[test]
    fn test_lines_are_trimmed_and_filtered() {
        let lines: Vec<&str> = task_lines("  a  \r\n\n   \n#skip\n  # also skip\nb").collect();
        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(matches!(classify_text(""), Err(CoreError::InvalidInput(_))));
        assert!(matches!(classify_text(" \n\t\n"), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_only_comments_yields_nothing() {
        assert!(classify_text("# one\n# two").unwrap().is_empty());
    }

    #[test]
    fn test_insights_end_with_count() {
        let insights = insights(2);
        assert_eq!(insights.len(), INSIGHTS.len() + 1);
        assert_eq!(insights.last().map(String::as_str), Some("✅ 2 tasks processed"));
    }
}
