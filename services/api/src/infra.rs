use essay_feedback::config::AppConfig;
use essay_feedback::error::AppError;
use essay_feedback::workflows::essay::{
    DefaultAnalysisService, EssayAnalysisService, HeuristicAnalyzer, ModelError,
    OpenAiChatModel, ReferenceDataset,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reference dataset from `ESSAY_REFERENCE_DIR` when set, otherwise the embedded copy.
pub(crate) fn load_reference_dataset(config: &AppConfig) -> Result<ReferenceDataset, AppError> {
    match &config.reference_dir {
        Some(dir) => {
            let dataset = ReferenceDataset::from_dir(dir)?;
            info!(dir = %dir.display(), "loaded reference dataset");
            Ok(dataset)
        }
        None => Ok(ReferenceDataset::builtin()),
    }
}

/// Wires the analysis service, attaching the chat model when a credential is present.
pub(crate) fn build_analysis_service(
    config: &AppConfig,
    heuristic_only: bool,
) -> Result<DefaultAnalysisService, AppError> {
    let dataset = Arc::new(load_reference_dataset(config)?);
    let service = EssayAnalysisService::new(HeuristicAnalyzer::default(), dataset);

    if heuristic_only {
        info!("language model disabled, heuristic analysis only");
        return Ok(service);
    }

    match OpenAiChatModel::from_config(&config.model) {
        Ok(model) => {
            info!(
                model = %config.model.model,
                endpoint = model.endpoint(),
                "language model configured"
            );
            Ok(service.with_model(Arc::new(model)))
        }
        Err(ModelError::NotConfigured) => {
            warn!("OPENAI_API_KEY not set, essays will be scored by the heuristic analyzer");
            Ok(service)
        }
        Err(err) => Err(AppError::Model(err.to_string())),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::config;
    use super::*;

    #[test]
    fn missing_key_builds_heuristic_service() {
        let service = build_analysis_service(&config(None), false).expect("service builds");
        assert!(!service.model_configured());
    }

    #[test]
    fn configured_key_attaches_model() {
        let service =
            build_analysis_service(&config(Some("sk-test")), false).expect("service builds");
        assert!(service.model_configured());
    }

    #[test]
    fn heuristic_only_ignores_key() {
        let service =
            build_analysis_service(&config(Some("sk-test")), true).expect("service builds");
        assert!(!service.model_configured());
    }

    #[test]
    fn unreadable_reference_dir_is_an_error() {
        let mut config = config(None);
        config.reference_dir = Some("/nonexistent/essay-reference".into());

        let err = build_analysis_service(&config, false).err().expect("rejected");
        assert!(matches!(err, AppError::Reference(_)));
    }
}
