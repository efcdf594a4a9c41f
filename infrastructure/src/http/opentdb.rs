//! Open Trivia Database question source
//!
//! `GET {base}/api.php?amount=N&category=17&type=multiple`. Category 17 is
//! "Science & Nature", the closest the service has to astronomy.

use super::{decode_html_entities, fetch_text, parse_json};
use async_trait::async_trait;
use cosmos_application::{QuestionSource, SourceError};
use cosmos_domain::{Category, Difficulty, QuizQuestion};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{info, warn};

const SCIENCE_AND_NATURE: u32 = 17;

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: i64,
    #[serde(default)]
    results: Vec<TriviaQuestion>,
}

#[derive(Debug, Deserialize)]
struct TriviaQuestion {
    #[serde(default)]
    difficulty: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Question source backed by opentdb.com
pub struct OpenTdbQuestionSource {
    client: reqwest::Client,
    base_url: String,
}

impl OpenTdbQuestionSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTdbQuestionSource {
    fn name(&self) -> &str {
        "opentdb"
    }

    async fn fetch_questions(&self, amount: usize) -> Result<Vec<QuizQuestion>, SourceError> {
        let request = self
            .client
            .get(format!("{}/api.php", self.base_url))
            .query(&[
                ("amount", amount.to_string()),
                ("category", SCIENCE_AND_NATURE.to_string()),
                ("type", "multiple".to_string()),
            ]);

        let body = fetch_text(request).await?;
        let questions = parse_questions(&body, &mut rand::rng())?;
        info!("opentdb returned {} usable questions", questions.len());
        Ok(questions)
    }
}

/// Map a trivia payload to validated questions.
///
/// Entities are decoded, options shuffled and ids derived from the question
/// text. Entries that do not form a valid four-option question are skipped.
fn parse_questions<R: Rng + ?Sized>(
    body: &str,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, SourceError> {
    let payload: TriviaResponse = parse_json(body)?;
    if payload.response_code != 0 {
        return Err(SourceError::Malformed(format!(
            "response_code {}",
            payload.response_code
        )));
    }

    let questions = payload
        .results
        .into_iter()
        .filter_map(|raw| match to_question(raw, rng) {
            Ok(question) => Some(question),
            Err(e) => {
                warn!("Skipping trivia question: {}", e);
                None
            }
        })
        .collect();
    Ok(questions)
}

fn to_question<R: Rng + ?Sized>(
    raw: TriviaQuestion,
    rng: &mut R,
) -> Result<QuizQuestion, cosmos_domain::DomainError> {
    let difficulty: Difficulty = raw.difficulty.parse()?;
    let text = decode_html_entities(&raw.question);
    let correct = decode_html_entities(&raw.correct_answer);

    let mut options: Vec<String> = raw
        .incorrect_answers
        .iter()
        .map(|a| decode_html_entities(a))
        .collect();
    options.push(correct.clone());
    options.shuffle(rng);

    QuizQuestion::try_new(
        question_id(&text),
        text,
        options,
        correct,
        difficulty,
        Category::General,
    )
}

/// Stable id for a remote question, kept clear of the built-in bank's range
fn question_id(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish() | (1u64 << 63)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const PAYLOAD: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "category": "Science &amp; Nature",
                "type": "multiple",
                "difficulty": "medium",
                "question": "Which planet has the moon &quot;Titan&quot;?",
                "correct_answer": "Saturn",
                "incorrect_answers": ["Jupiter", "Uranus", "Neptune"]
            },
            {
                "category": "Science &amp; Nature",
                "type": "multiple",
                "difficulty": "easy",
                "question": "What is H&#039;s atomic number?",
                "correct_answer": "1",
                "incorrect_answers": ["2", "3"]
            },
            {
                "category": "Science &amp; Nature",
                "type": "multiple",
                "difficulty": "hard",
                "question": "Who discovered Uranus?",
                "correct_answer": "William Herschel",
                "incorrect_answers": ["Galileo Galilei", "Johannes Kepler", "Tycho Brahe"]
            }
        ]
    }"#;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    #[test]
    fn test_parse_decodes_and_validates() {
        let questions = parse_questions(PAYLOAD, &mut rng()).unwrap();

        // The three-option entry is dropped
        assert_eq!(questions.len(), 2);

        let titan = &questions[0];
        assert_eq!(titan.question, "Which planet has the moon \"Titan\"?");
        assert_eq!(titan.correct_answer, "Saturn");
        assert_eq!(titan.difficulty, Difficulty::Medium);
        assert_eq!(titan.options.len(), 4);
        assert!(titan.options.contains(&"Saturn".to_string()));

        assert_eq!(questions[1].difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_ids_are_stable_and_distinct() {
        let first = parse_questions(PAYLOAD, &mut rng()).unwrap();
        let second = parse_questions(PAYLOAD, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert_ne!(first[0].id, first[1].id);
        assert!(first[0].id >= 1u64 << 63);
    }

    #[test]
    fn test_nonzero_response_code_is_malformed() {
        let body = r#"{"response_code": 1, "results": []}"#;
        let err = parse_questions(body, &mut rng()).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(msg) if msg.contains('1')));
    }

    #[test]
    fn test_unknown_difficulty_is_skipped() {
        let body = r#"{"response_code": 0, "results": [{
            "difficulty": "legendary",
            "question": "Q?",
            "correct_answer": "a",
            "incorrect_answers": ["b", "c", "d"]
        }]}"#;
        assert!(parse_questions(body, &mut rng()).unwrap().is_empty());
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            parse_questions("<html>", &mut rng()),
            Err(SourceError::Malformed(_))
        ));
    }
}
