use super::common::*;

use crate::workflows::essay::{
    ArgumentElement, Effectiveness, FallbackReason, HeuristicAnalyzer, PromptCatalog,
};

fn assert_anchored(essay: &str, element: &ArgumentElement) {
    match element.span {
        Some(span) => assert_eq!(span.slice(essay), Some(element.text.as_str())),
        None => assert!(element.text.is_empty(), "unanchored text {:?}", element.text),
    }
}

fn assert_well_formed(essay: &str, analyzer: &HeuristicAnalyzer) {
    let elements = analyzer.detect_elements(essay);

    assert_ne!(elements.lead.effectiveness, Effectiveness::Missing);
    for (role, element) in elements.singletons().into_iter().skip(1) {
        assert_eq!(
            element.is_missing(),
            element.text.is_empty(),
            "{role} breaks the missing/empty pairing"
        );
        assert_anchored(essay, element);
    }
    assert!(!elements.claims.is_empty());
    assert!(!elements.evidence.is_empty());
    for element in elements.claims.iter().chain(elements.evidence.iter()) {
        assert_anchored(essay, element);
    }
    assert!(elements
        .evidence
        .iter()
        .all(|evidence| evidence.effectiveness != Effectiveness::Missing));
}

#[test]
fn short_plain_essay_reports_gaps() {
    let essay = vec!["a"; 250].join(" ");
    let analyzer = analyzer();

    let result = analyzer.analyze(&essay, FallbackReason::NotConfigured);

    assert_eq!(result.holistic_score, 5.0);
    assert_eq!(result.elements.lead.text, essay);
    assert_eq!(result.elements.lead.effectiveness, Effectiveness::Adequate);
    assert_eq!(result.elements.position.effectiveness, Effectiveness::Missing);
    assert_eq!(result.elements.position.text, "");
    assert_eq!(result.elements.evidence.len(), 1);
    assert_eq!(
        result.elements.evidence[0].effectiveness,
        Effectiveness::Ineffective
    );
    assert_eq!(result.elements.claims[0].effectiveness, Effectiveness::Missing);
    assert_eq!(
        result.elements.missing_roles(),
        vec!["position", "counterclaim", "rebuttal", "conclusion", "claims"]
    );
}

#[test]
fn lead_length_counts_characters_not_bytes() {
    let essay = vec!["é"; 250].join(" ");
    assert_eq!(essay.chars().count(), 499);
    assert!(essay.len() > 500);

    let lead = analyzer().detect_elements(&essay).lead;

    assert_eq!(lead.text, essay);
    assert_eq!(lead.effectiveness, Effectiveness::Adequate);
}

#[test]
fn lead_runs_through_first_sentence() {
    let essay = format!("Technology shapes how we learn. {}", filler(220));

    let lead = analyzer().detect_elements(&essay).lead;

    assert_eq!(lead.text, "Technology shapes how we learn.");
    assert_eq!(lead.effectiveness, Effectiveness::Effective);
    assert_eq!(lead.span.map(|span| span.start), Some(0));
}

#[test]
fn position_captures_fixed_window() {
    let essay = format!("Schools change. In my opinion, {}", filler(220));

    let position = analyzer().detect_elements(&essay).position;

    assert_eq!(position.effectiveness, Effectiveness::Effective);
    assert_eq!(position.text.chars().count(), 100);
    assert!(position.text.starts_with("In my opinion, students"));
    assert_anchored(&essay, &position);
}

#[test]
fn position_falls_back_to_second_phrase() {
    let essay = format!("I believe schools matter. {}", filler(220));

    let position = analyzer().detect_elements(&essay).position;

    assert!(position.text.starts_with("I believe schools matter."));
}

#[test]
fn signposted_claims_are_ordered_and_developed() {
    let essay = format!(
        "Intro sentence. Firstly, access improves. {} Secondly, costs fall. Finally, teachers adapt. {}",
        filler(100),
        filler(100)
    );

    let claims = analyzer().detect_elements(&essay).claims;

    let texts: Vec<&str> = claims.iter().map(|claim| claim.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Firstly, access improves.",
            "Secondly, costs fall.",
            "Finally, teachers adapt."
        ]
    );
    assert!(claims
        .iter()
        .all(|claim| claim.effectiveness == Effectiveness::Effective));
}

#[test]
fn followup_markers_before_opener_are_ignored() {
    let essay = format!(
        "Finally, screens reached classrooms. Firstly, access improves. {}",
        filler(220)
    );

    let claims = analyzer().detect_elements(&essay).claims;

    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].text, "Firstly, access improves.");
}

#[test]
fn undeveloped_claim_rates_adequate() {
    let essay = format!("Intro sentence. First, access improves. {}", filler(220));

    let claims = analyzer().detect_elements(&essay).claims;

    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].text, "First, access improves.");
    assert_eq!(claims[0].effectiveness, Effectiveness::Adequate);
}

#[test]
fn evidence_lists_every_example_in_order() {
    let essay = format!(
        "Intro sentence. For example, libraries lend tablets. {} For instance, MOOCs are free. For example, apps drill vocabulary.",
        filler(200)
    );

    let evidence = analyzer().detect_elements(&essay).evidence;

    let texts: Vec<&str> = evidence.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "For example, libraries lend tablets.",
            "For instance, MOOCs are free.",
            "For example, apps drill vocabulary."
        ]
    );
    assert!(evidence
        .iter()
        .all(|item| item.effectiveness == Effectiveness::Adequate));
}

#[test]
fn counterclaim_and_rebuttal_take_their_sentences() {
    let essay = format!(
        "Intro sentence. {} However, some say screens distract. Nevertheless, guidance helps.",
        filler(200)
    );

    let elements = analyzer().detect_elements(&essay);

    assert_eq!(elements.counterclaim.text, "However, some say screens distract.");
    assert_eq!(elements.counterclaim.effectiveness, Effectiveness::Effective);
    assert_eq!(elements.rebuttal.text, "Nevertheless, guidance helps.");
    assert_eq!(elements.rebuttal.effectiveness, Effectiveness::Adequate);
}

#[test]
fn conclusion_runs_from_last_marker_to_end() {
    let essay = format!(
        "In conclusion is how some start. {} To conclude, this is ignored. In conclusion, balance matters. Thanks",
        filler(200)
    );

    let conclusion = analyzer().detect_elements(&essay).conclusion;

    assert_eq!(conclusion.text, "In conclusion, balance matters. Thanks");
    assert_eq!(conclusion.effectiveness, Effectiveness::Adequate);
    assert_anchored(&essay, &conclusion);
}

#[test]
fn sample_essays_keep_element_invariants() {
    let analyzer = analyzer();
    let catalog = PromptCatalog::builtin();

    for prompt in catalog.all() {
        if let Some(essay) = prompt.sample_essay {
            assert_well_formed(essay, &analyzer);
        }
    }
    assert_well_formed(&filler(250), &analyzer);
    assert_well_formed(&essay_with(300, &["Firstly", "However", "In conclusion"]), &analyzer);
}

#[test]
fn technology_sample_is_fully_signposted() {
    let essay = PromptCatalog::builtin()
        .get(1)
        .and_then(|prompt| prompt.sample_essay)
        .expect("sample essay");

    let elements = analyzer().detect_elements(essay);

    assert_eq!(elements.position.effectiveness, Effectiveness::Effective);
    assert_eq!(elements.claims.len(), 1);
    assert_eq!(elements.claims[0].effectiveness, Effectiveness::Effective);
    assert!(elements.evidence[0].text.starts_with("For instance"));
    assert_eq!(elements.counterclaim.effectiveness, Effectiveness::Effective);
    assert_eq!(elements.rebuttal.effectiveness, Effectiveness::Missing);
    assert!(elements.conclusion.text.starts_with("In conclusion"));
}
