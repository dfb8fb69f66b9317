use intro_scorer::scoring::{
    rule_based_scores, score_transcript, Criterion, Details, DisabledScorer, EngineOptions,
    Lexicon, SemanticScorer, SemanticStatus,
};
use intro_scorer::settings::FailurePolicy;
use intro_scorer::{Result, ScoringError};

/// Returns the same similarity for every reference description.
struct FixedScorer(f32);

impl SemanticScorer for FixedScorer {
    async fn similarity(&self, _text: &str, _reference: &str) -> Result<f32> {
        Ok(self.0)
    }
}

/// Answers the batched call directly, one value per criterion.
struct BatchScorer(Vec<f32>);

impl SemanticScorer for BatchScorer {
    async fn similarity(&self, _text: &str, _reference: &str) -> Result<f32> {
        Err(ScoringError::unavailable("only batched calls are supported"))
    }

    async fn rubric_similarities(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(self.0.clone())
    }
}

const FULL_INTRO: &str = "Good morning everyone. I am excited to introduce myself. \
    My name is Priya and I am 14 years old. I study in class 9 at Hillview school. \
    I live with my family of four and we are from Chennai. My hobby is playing the violin \
    and I also enjoy reading books. I am proud of my achievement in the state music contest. \
    My goal is to become a doctor and my dream is to help people in villages. \
    A fun fact about me is that I can solve a cube in one minute. Thank you for listening.";

fn scores_for(text: &str) -> Vec<(Criterion, f64)> {
    rule_based_scores(text, &Lexicon::STANDARD)
        .results
        .into_iter()
        .map(|r| (r.criterion, r.score))
        .collect()
}

#[tokio::test]
async fn full_intro_scores_well() {
    let report = score_transcript(FULL_INTRO, &FixedScorer(0.6), &EngineOptions::default())
        .await
        .unwrap();

    assert_eq!(report.semantic_status, SemanticStatus::Ok);
    assert_eq!(report.criteria.len(), 8);

    let salutation = report.criterion(Criterion::Salutation).unwrap();
    assert_eq!(salutation.rule_score, 100.0);

    let keywords = report.criterion(Criterion::KeywordPresence).unwrap();
    assert_eq!(keywords.rule_score, 100.0);

    let flow = report.criterion(Criterion::Flow).unwrap();
    assert_eq!(flow.rule_score, 100.0);

    assert!(report.overall_score > 60.0 && report.overall_score <= 100.0);
}

#[tokio::test]
async fn weights_and_order_are_reported() {
    let report = score_transcript("hi hi hi", &FixedScorer(0.0), &EngineOptions::default())
        .await
        .unwrap();

    let weights: Vec<u32> = report.criteria.iter().map(|c| c.weight).collect();
    assert_eq!(weights, vec![5, 30, 5, 10, 10, 10, 15, 15]);
    assert_eq!(weights.iter().sum::<u32>(), 100);

    let order: Vec<Criterion> = report.criteria.iter().map(|c| c.criterion).collect();
    assert_eq!(order, Criterion::all().collect::<Vec<_>>());
}

#[tokio::test]
async fn hi_hi_hi_is_a_normal_greeting() {
    let report = score_transcript("hi hi hi", &FixedScorer(0.0), &EngineOptions::default())
        .await
        .unwrap();
    let salutation = report.criterion(Criterion::Salutation).unwrap();
    assert_eq!(salutation.rule_score, 50.0);
    match &salutation.details {
        Details::Salutation(d) => assert_eq!(d.level.to_string(), "Normal"),
        other => panic!("unexpected details {other:?}"),
    }
}

#[tokio::test]
async fn batched_scores_land_on_matching_criteria() {
    let mut sims = vec![-1.0; 8];
    sims[Criterion::Clarity.index()] = 1.0;
    let report = score_transcript("", &BatchScorer(sims), &EngineOptions::default())
        .await
        .unwrap();

    for c in &report.criteria {
        let expected = if c.criterion == Criterion::Clarity {
            100.0
        } else {
            0.0
        };
        assert_eq!(c.semantic_score, Some(expected));
    }
}

#[tokio::test]
async fn wrong_batch_length_is_a_semantic_error() {
    let err = score_transcript("hello", &BatchScorer(vec![0.0; 3]), &EngineOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_semantic());
}

#[tokio::test]
async fn empty_transcript_is_scored() {
    let options = EngineOptions {
        on_failure: FailurePolicy::RuleOnly,
        ..EngineOptions::default()
    };
    let report = score_transcript("", &DisabledScorer, &options).await.unwrap();

    assert_eq!(report.word_count, 0);
    assert_eq!(report.semantic_status, SemanticStatus::Unavailable);
    let vocabulary = report.criterion(Criterion::Vocabulary).unwrap();
    assert_eq!(vocabulary.score, 0.0);
    assert!(report.overall_score >= 0.0 && report.overall_score <= 100.0);
}

#[tokio::test]
async fn semantic_failure_rejects_by_default() {
    let err = score_transcript("hello", &DisabledScorer, &EngineOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScoringError::SemanticUnavailable(_)));
}

#[test]
fn rule_scores_are_stable_and_bounded() {
    let texts = [
        FULL_INTRO,
        "",
        "!!!",
        "um like you know um like",
        "Привет, меня зовут Иван",
    ];
    for text in texts {
        let first = scores_for(text);
        assert_eq!(first, scores_for(text));
        assert!(first.iter().all(|(_, s)| (0.0..=100.0).contains(s)));
    }
}
