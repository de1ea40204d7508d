use super::super::domain::LinguisticMetrics;
use super::config::MetricTriggers;

const ACADEMIC_COVERAGE: (f64, f64) = (12.5, 8.2);
const LEXICAL_PREVALENCE: (f64, f64) = (2.8, 3.5);
const CLAUSE_COMPLEXITY: (f64, f64) = (1.4, 1.1);
const DEPENDENT_CLAUSE_RATIO: (f64, f64) = (0.35, 0.22);
const VERB_PHRASE_RATIO: f64 = 1.2;

fn pick(essay: &str, phrases: &[String], (present, absent): (f64, f64)) -> f64 {
    if phrases.iter().any(|phrase| essay.contains(phrase.as_str())) {
        present
    } else {
        absent
    }
}

/// Length and keyword proxies for the six metrics; no parsing happens here.
pub(crate) fn estimate_metrics(
    essay: &str,
    word_count: usize,
    triggers: &MetricTriggers,
) -> LinguisticMetrics {
    LinguisticMetrics {
        lexical_diversity: f64::min(
            triggers.diversity_cap,
            word_count as f64 / triggers.diversity_word_scale,
        ),
        academic_word_coverage: pick(essay, &triggers.academic, ACADEMIC_COVERAGE),
        lexical_prevalence: pick(essay, &triggers.sophisticated, LEXICAL_PREVALENCE),
        clause_complexity: pick(essay, &triggers.subordinators, CLAUSE_COMPLEXITY),
        verb_phrase_ratio: VERB_PHRASE_RATIO,
        dependent_clause_ratio: pick(essay, &triggers.relatives, DEPENDENT_CLAUSE_RATIO),
    }
}
