use anyhow::Result;
use rust_bert::pipelines::sentence_embeddings::{
    SentenceEmbeddingsBuilder, SentenceEmbeddingsModel, SentenceEmbeddingsModelType,
};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;
use tokio::sync::oneshot;

use super::criterion::Criterion;
use super::semantic::{cosine_similarity, SemanticScorer};
use crate::error::ScoringError;
use crate::utils::{log_ml_error, log_ml_model_loaded, log_ml_ready, log_ml_step};

type Reply<T> = oneshot::Sender<std::result::Result<T, String>>;

pub enum EmbeddingRequest {
    Rubric {
        text: String,
        response_tx: Reply<Vec<f32>>,
    },
}

/// Cheap handle to the thread that owns the sentence embedding model.
#[derive(Clone)]
pub struct EmbeddingHandle {
    request_tx: mpsc::Sender<EmbeddingRequest>,
}

impl EmbeddingHandle {
    /// Returns immediately; the model loads in the background and requests
    /// queue until it is ready.
    pub fn spawn() -> Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<EmbeddingRequest>();

        thread::Builder::new()
            .name("embedding-worker".to_string())
            .spawn(move || {
                if let Err(e) = run_embedding_worker(request_rx) {
                    log_ml_error(&format!("Worker failed: {e}"));
                }
            })?;

        Ok(Self { request_tx })
    }

    fn send(&self, request: EmbeddingRequest) -> crate::error::Result<()> {
        self.request_tx
            .send(request)
            .map_err(|_| ScoringError::unavailable("embedding worker channel closed"))
    }
}

async fn await_reply<T>(
    response_rx: oneshot::Receiver<std::result::Result<T, String>>,
) -> crate::error::Result<T> {
    response_rx
        .await
        .map_err(|_| ScoringError::unavailable("embedding worker stopped"))?
        .map_err(ScoringError::SemanticUnavailable)
}

/// The worker only holds embeddings for the rubric references, so per-pair
/// similarity is answered from the batched rubric comparison.
impl SemanticScorer for EmbeddingHandle {
    async fn similarity(&self, text: &str, reference: &str) -> crate::error::Result<f32> {
        let criterion = Criterion::from_reference(reference)
            .ok_or_else(|| ScoringError::unavailable("reference is not a rubric description"))?;
        let similarities = self.rubric_similarities(text).await?;
        similarities
            .get(criterion.index())
            .copied()
            .ok_or_else(|| ScoringError::unavailable("embedding worker returned too few similarities"))
    }

    async fn rubric_similarities(&self, text: &str) -> crate::error::Result<Vec<f32>> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(EmbeddingRequest::Rubric {
            text: text.to_string(),
            response_tx,
        })?;
        await_reply(response_rx).await
    }
}

struct RubricEmbedder {
    model: SentenceEmbeddingsModel,
    references: Vec<Vec<f32>>,
}

impl RubricEmbedder {
    fn load() -> Result<Self> {
        log_ml_step("Loading sentence embedding model...");
        let start = Instant::now();
        let model = SentenceEmbeddingsBuilder::remote(SentenceEmbeddingsModelType::AllMiniLmL6V2)
            .create_model()?;
        log_ml_model_loaded("Sentence embeddings", start.elapsed().as_secs_f32());

        let references = model.encode(Criterion::reference_descriptions().as_slice())?;
        Ok(Self { model, references })
    }

    fn embed(&self, text: &str) -> std::result::Result<Vec<f32>, String> {
        self.model
            .encode(&[text])
            .map_err(|e| e.to_string())?
            .into_iter()
            .next()
            .ok_or_else(|| "model returned no embedding".to_string())
    }

    fn rubric(&self, text: &str) -> std::result::Result<Vec<f32>, String> {
        let embedding = self.embed(text)?;
        self.references
            .iter()
            .map(|reference| {
                cosine_similarity(&embedding, reference)
                    .ok_or_else(|| "embedding dimensions do not match".to_string())
            })
            .collect()
    }
}

fn run_embedding_worker(request_rx: mpsc::Receiver<EmbeddingRequest>) -> Result<()> {
    let embedder = RubricEmbedder::load()?;
    log_ml_ready();

    for request in request_rx {
        match request {
            EmbeddingRequest::Rubric { text, response_tx } => {
                let _ = response_tx.send(embedder.rubric(&text));
            }
        }
    }

    Ok(())
}
