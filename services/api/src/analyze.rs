use crate::infra::build_analysis_service;
use clap::Args;
use essay_feedback::config::AppConfig;
use essay_feedback::error::AppError;
use essay_feedback::telemetry;
use essay_feedback::workflows::essay::{
    AnalysisSource, EssaySubmission, PromptCatalog, SamplePrompt,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a plain-text essay
    #[arg(long)]
    pub(crate) essay: PathBuf,
    /// Task prompt text the essay answers
    #[arg(long, conflicts_with = "prompt_id")]
    pub(crate) prompt: Option<String>,
    /// Use a built-in practice prompt (see `prompts`); defaults to the first one
    #[arg(long)]
    pub(crate) prompt_id: Option<u32>,
    /// Skip the language model even when OPENAI_API_KEY is set
    #[arg(long)]
    pub(crate) heuristic_only: bool,
}

fn resolve_prompt(
    catalog: &PromptCatalog,
    prompt: Option<String>,
    prompt_id: Option<u32>,
) -> Result<String, AppError> {
    if let Some(prompt) = prompt {
        return Ok(prompt);
    }

    let selected = match prompt_id {
        Some(id) => catalog
            .get(id)
            .ok_or_else(|| AppError::Input(format!("sample prompt {id} not found")))?,
        None => catalog
            .default_prompt()
            .ok_or_else(|| AppError::Input("prompt catalog is empty".to_string()))?,
    };
    Ok(selected.prompt.to_string())
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        essay,
        prompt,
        prompt_id,
        heuristic_only,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let prompt = resolve_prompt(&PromptCatalog::builtin(), prompt, prompt_id)?;
    let essay = std::fs::read_to_string(&essay)?;
    let service = build_analysis_service(&config, heuristic_only)?;

    let analyzed = service
        .analyze(&EssaySubmission::new(essay, prompt))
        .await?;

    match analyzed.source {
        AnalysisSource::Model => eprintln!("Analysis source: language model"),
        AnalysisSource::Heuristic { reason } => {
            eprintln!("Analysis source: heuristic fallback ({reason:?})")
        }
    }

    let rendered =
        serde_json::to_string_pretty(&analyzed.result).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_prompt(prompt: &SamplePrompt) -> String {
    let mut line = format!("{}. {}\n   {}", prompt.id, prompt.title, prompt.prompt);
    if prompt.sample_essay.is_some() {
        line.push_str("\n   (sample essay available)");
    }
    line
}

pub(crate) fn run_prompts() {
    println!("IELTS Writing Task 2 practice prompts");
    for prompt in PromptCatalog::builtin().all() {
        println!("{}", render_prompt(prompt));
    }
}
