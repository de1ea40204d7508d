use super::super::domain::{
    AnalysisResult, ArgumentElements, FallbackReason, LinguisticMetrics, RubricFeedback,
};
use super::scoring::BandEstimate;

pub const HEURISTIC_CONFIDENCE: &str = "75%";
pub const RECOMMENDATION_COUNT: usize = 3;

/// Inputs collected by the scorer, detector and metric estimator.
pub(crate) struct AssemblyInput {
    pub word_count: usize,
    pub estimate: BandEstimate,
    pub elements: ArgumentElements,
    pub metrics: LinguisticMetrics,
    pub organized: bool,
    pub reason: FallbackReason,
}

pub(crate) fn assemble(input: AssemblyInput) -> AnalysisResult {
    let AssemblyInput {
        word_count,
        estimate,
        elements,
        metrics,
        organized,
        reason,
    } = input;
    let score = estimate.holistic;

    AnalysisResult {
        holistic_score: score,
        confidence: HEURISTIC_CONFIDENCE.to_string(),
        score_rationale: rationale(score, word_count),
        elements,
        linguistic_metrics: metrics,
        rubric_scores: estimate.rubric,
        rubric_feedback: rubric_feedback(score, organized),
        natural_language_summary: summary(score, word_count, reason),
        recommendations: recommendations_for(score),
    }
}

fn rationale(score: f64, word_count: usize) -> String {
    let level = if score >= 7.0 {
        "good"
    } else if score >= 6.0 {
        "adequate"
    } else {
        "basic"
    };
    format!(
        "This essay demonstrates {level} writing skills with {word_count} words. Your essay \
         addresses the task and presents a clear opinion, but the ideas need deeper development \
         and better connection between points. The vocabulary and grammar are mostly accurate \
         but a bit basic and repetitive. With more precise wording and smoother transitions, \
         this could easily move up a band."
    )
}

fn rubric_feedback(score: f64, organized: bool) -> RubricFeedback {
    let task_achievement = format!(
        "Your essay {} the task requirements. {}",
        if score >= 6.5 {
            "adequately addresses"
        } else {
            "attempts to address"
        },
        if score >= 7.0 {
            "Ideas are well-developed."
        } else {
            "Consider developing your ideas further."
        }
    );

    let coherence_cohesion = format!(
        "{} Your essay shows {} organization.",
        if organized {
            "Good use of organizing language."
        } else {
            "Consider using more linking words."
        },
        if score >= 6.0 { "adequate" } else { "basic" }
    );

    let vocabulary = if score >= 7.0 {
        "varied and appropriate"
    } else if score >= 6.0 {
        "adequate for the task"
    } else {
        "limited but functional"
    };
    let mut lexical_resource = format!("Your vocabulary is {vocabulary}.");
    if score < 6.0 {
        lexical_resource.push_str(" Try to use more sophisticated vocabulary.");
    }

    let grammar = if score >= 7.0 {
        "good control with complex structures"
    } else if score >= 6.0 {
        "adequate control with some complex forms"
    } else {
        "basic control with simple structures"
    };
    let mut grammatical_range = format!("Your grammar shows {grammar}.");
    if score < 6.0 {
        grammatical_range.push_str(" Practice using more varied sentence structures.");
    }

    RubricFeedback {
        task_achievement,
        coherence_cohesion,
        lexical_resource,
        grammatical_range,
    }
}

fn summary(score: f64, word_count: usize, reason: FallbackReason) -> String {
    let level = if score >= 7.0 {
        "good"
    } else if score >= 6.0 {
        "adequate"
    } else {
        "developing"
    };
    let response = if score >= 6.5 {
        "addresses the task appropriately"
    } else {
        "attempts to address the task"
    };
    let structure = if score >= 7.0 {
        "The argument is well-structured with clear examples."
    } else if score >= 6.0 {
        "The basic structure is present but could be developed further."
    } else {
        "Focus on developing your ideas more fully and using more sophisticated language."
    };
    format!(
        "This essay demonstrates {level} writing skills. The response {response} with \
         {word_count} words. {structure} {}",
        reason.note()
    )
}

/// Three recommendations keyed on the 6.0, 6.5 and 7.0 band thresholds.
pub fn recommendations_for(score: f64) -> Vec<String> {
    let first = if score < 6.0 {
        "Develop your ideas more fully with detailed explanations"
    } else {
        "Consider adding more sophisticated vocabulary and complex sentence structures"
    };
    let second = if score < 6.5 {
        "Use more linking words and transitions between paragraphs"
    } else {
        "Strengthen your evidence with more specific examples"
    };
    let third = if score < 7.0 {
        "Practice writing longer, more detailed responses"
    } else {
        "Focus on making your conclusion more impactful and memorable"
    };
    vec![first.to_string(), second.to_string(), third.to_string()]
}
