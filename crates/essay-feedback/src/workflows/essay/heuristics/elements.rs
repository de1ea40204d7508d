use super::super::domain::{ArgumentElement, ArgumentElements, Effectiveness, SourceSpan};
use super::config::ElementTriggers;

/// Fixed coaching copy for one argumentative role.
struct RoleCopy {
    found: &'static str,
    absent: &'static str,
    indirect: &'static str,
    reflection: &'static str,
}

const LEAD: RoleCopy = RoleCopy {
    found: "Your opening sentence introduces the topic. Consider making it more engaging to capture the reader's attention.",
    absent: "Your opening sentence introduces the topic. Consider making it more engaging to capture the reader's attention.",
    indirect: "How effectively does your opening engage the reader?",
    reflection: "What makes an introduction compelling?",
};

const POSITION: RoleCopy = RoleCopy {
    found: "Clear position statement identified.",
    absent: "No clear position statement found. Make sure to state your opinion clearly.",
    indirect: "Is your position clearly stated?",
    reflection: "How does a clear thesis guide your reader?",
};

const CLAIMS: RoleCopy = RoleCopy {
    found: "Your essay presents main arguments. Consider developing them further with more detailed explanations.",
    absent: "No clearly signposted claims found. Introduce each main argument with an organizing phrase such as \"Firstly\".",
    indirect: "Are your main arguments clearly identifiable?",
    reflection: "How do your claims support your overall position?",
};

const EVIDENCE: RoleCopy = RoleCopy {
    found: "Good use of examples. Try to include more specific and varied evidence.",
    absent: "Add specific examples and evidence to support your claims.",
    indirect: "What types of evidence strengthen your arguments?",
    reflection: "How effectively do your examples support your claims?",
};

const COUNTERCLAIM: RoleCopy = RoleCopy {
    found: "Good acknowledgment of opposing views.",
    absent: "Consider acknowledging opposing viewpoints to strengthen your argument.",
    indirect: "How well do you address opposing arguments?",
    reflection: "Why is it important to acknowledge counterarguments?",
};

const REBUTTAL: RoleCopy = RoleCopy {
    found: "You respond to opposing views. Consider strengthening your rebuttal.",
    absent: "Add a rebuttal to counter opposing arguments.",
    indirect: "How do you respond to opposing viewpoints?",
    reflection: "What makes your rebuttal convincing?",
};

const CONCLUSION: RoleCopy = RoleCopy {
    found: "Conclusion present. Consider making it more impactful.",
    absent: "Add a strong conclusion to summarize your arguments.",
    indirect: "Does your conclusion effectively wrap up your argument?",
    reflection: "How can you make your conclusion more memorable?",
};

pub(crate) fn detect_elements(essay: &str, triggers: &ElementTriggers) -> ArgumentElements {
    ArgumentElements {
        lead: detect_lead(essay, triggers),
        position: detect_position(essay, triggers),
        claims: detect_claims(essay, triggers),
        evidence: detect_evidence(essay, triggers),
        counterclaim: fragment_element(
            essay,
            &triggers.counterclaim,
            Effectiveness::Effective,
            &COUNTERCLAIM,
        ),
        rebuttal: fragment_element(essay, &triggers.rebuttal, Effectiveness::Adequate, &REBUTTAL),
        conclusion: detect_conclusion(essay, triggers),
    }
}

/// First phrase of `phrases` present in `essay`, with the offset of its first occurrence.
pub(crate) fn first_match<'p>(essay: &str, phrases: &'p [String]) -> Option<(usize, &'p str)> {
    phrases
        .iter()
        .find_map(|phrase| essay.find(phrase.as_str()).map(|at| (at, phrase.as_str())))
}

fn contains_any(essay: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|phrase| essay.contains(phrase.as_str()))
}

/// From `start` through the next sentence terminator, or to the end of the essay.
fn sentence_from(essay: &str, start: usize) -> SourceSpan {
    let end = essay[start..]
        .find('.')
        .map(|offset| start + offset + 1)
        .unwrap_or(essay.len());
    SourceSpan::new(start, end)
}

fn found(essay: &str, span: SourceSpan, effectiveness: Effectiveness, copy: &RoleCopy) -> ArgumentElement {
    ArgumentElement {
        text: essay[span.start..span.end].to_string(),
        effectiveness,
        feedback: copy.found.to_string(),
        indirect_feedback: copy.indirect.to_string(),
        reflection_prompt: copy.reflection.to_string(),
        span: Some(span),
    }
}

fn absent(effectiveness: Effectiveness, copy: &RoleCopy) -> ArgumentElement {
    ArgumentElement {
        text: String::new(),
        effectiveness,
        feedback: copy.absent.to_string(),
        indirect_feedback: copy.indirect.to_string(),
        reflection_prompt: copy.reflection.to_string(),
        span: None,
    }
}

fn detect_lead(essay: &str, triggers: &ElementTriggers) -> ArgumentElement {
    let end = essay
        .find(triggers.lead_terminator)
        .map(|at| at + triggers.lead_terminator.len_utf8())
        .unwrap_or(essay.len());
    let effectiveness = if essay.chars().count() > triggers.lead_effective_min_len {
        Effectiveness::Effective
    } else {
        Effectiveness::Adequate
    };
    found(essay, SourceSpan::new(0, end), effectiveness, &LEAD)
}

fn detect_position(essay: &str, triggers: &ElementTriggers) -> ArgumentElement {
    match first_match(essay, &triggers.position) {
        Some((start, _)) => {
            let end = essay[start..]
                .char_indices()
                .nth(triggers.position_window_chars)
                .map(|(offset, _)| start + offset)
                .unwrap_or(essay.len());
            found(
                essay,
                SourceSpan::new(start, end),
                Effectiveness::Effective,
                &POSITION,
            )
        }
        None => absent(Effectiveness::Missing, &POSITION),
    }
}

fn detect_claims(essay: &str, triggers: &ElementTriggers) -> Vec<ArgumentElement> {
    let Some((opener, _)) = first_match(essay, &triggers.claim_openers) else {
        return vec![absent(Effectiveness::Missing, &CLAIMS)];
    };

    let effectiveness = if contains_any(essay, &triggers.claim_development) {
        Effectiveness::Effective
    } else {
        Effectiveness::Adequate
    };

    let mut starts = vec![opener];
    starts.extend(
        triggers
            .claim_followups
            .iter()
            .filter_map(|marker| essay.find(marker.as_str()))
            .filter(|start| *start >= opener),
    );
    starts.sort_unstable();
    starts.dedup();

    starts
        .into_iter()
        .map(|start| found(essay, sentence_from(essay, start), effectiveness, &CLAIMS))
        .collect()
}

fn detect_evidence(essay: &str, triggers: &ElementTriggers) -> Vec<ArgumentElement> {
    let mut starts: Vec<usize> = triggers
        .evidence
        .iter()
        .flat_map(|phrase| essay.match_indices(phrase.as_str()).map(|(at, _)| at))
        .collect();
    starts.sort_unstable();
    starts.dedup();

    if starts.is_empty() {
        // Evidence is never reported Missing: absence rates Ineffective.
        return vec![absent(Effectiveness::Ineffective, &EVIDENCE)];
    }

    starts
        .into_iter()
        .map(|start| {
            found(
                essay,
                sentence_from(essay, start),
                Effectiveness::Adequate,
                &EVIDENCE,
            )
        })
        .collect()
}

fn fragment_element(
    essay: &str,
    phrases: &[String],
    when_found: Effectiveness,
    copy: &RoleCopy,
) -> ArgumentElement {
    match first_match(essay, phrases) {
        Some((start, _)) => found(essay, sentence_from(essay, start), when_found, copy),
        None => absent(Effectiveness::Missing, copy),
    }
}

fn detect_conclusion(essay: &str, triggers: &ElementTriggers) -> ArgumentElement {
    let last = triggers
        .conclusion
        .iter()
        .find_map(|phrase| essay.rfind(phrase.as_str()));
    match last {
        Some(start) => found(
            essay,
            SourceSpan::new(start, essay.len()),
            Effectiveness::Adequate,
            &CONCLUSION,
        ),
        None => absent(Effectiveness::Missing, &CONCLUSION),
    }
}
