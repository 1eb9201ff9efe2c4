//! # Request Bodies
//!
//! JSON request types and their validation. Every field is optional at the
//! serde level so that a missing field becomes a domain error instead of a
//! framework rejection.

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::quiz::{CategoryScope, QuizRound};
use crate::store::NewQuestion;

use super::errors::{ApiError, ApiResult};

/// Accepted difficulty ratings
pub const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=5;

/// An integer that clients may also send as a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Int(i64),
    Text(String),
}

impl NumericField {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumericField::Int(n) => Some(*n),
            NumericField::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `POST /questions` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<NumericField>,
    #[serde(default)]
    pub difficulty: Option<NumericField>,
}

impl CreateQuestionRequest {
    /// Check presence and shape of every field.
    ///
    /// Whether the category exists is checked against the store afterwards.
    pub fn validate(self) -> ApiResult<NewQuestion> {
        let question = required_text("question", self.question)?;
        let answer = required_text("answer", self.answer)?;
        let category = required_int("category", self.category.as_ref())?;
        let difficulty = required_int("difficulty", self.difficulty.as_ref())?;

        if !DIFFICULTY_RANGE.contains(&difficulty) {
            return Err(ApiError::Unprocessable(format!(
                "difficulty {} outside {}..={}",
                difficulty,
                DIFFICULTY_RANGE.start(),
                DIFFICULTY_RANGE.end()
            )));
        }

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Some(_) => Err(ApiError::Unprocessable(format!("{} is empty", field))),
        None => Err(ApiError::Unprocessable(format!("{} is missing", field))),
    }
}

fn required_int(field: &str, value: Option<&NumericField>) -> ApiResult<i64> {
    let value = value.ok_or_else(|| ApiError::Unprocessable(format!("{} is missing", field)))?;
    value
        .as_i64()
        .ok_or_else(|| ApiError::Unprocessable(format!("{} is not an integer", field)))
}

/// `POST /questions/search` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    pub fn term(self) -> ApiResult<String> {
        self.search_term
            .ok_or_else(|| ApiError::BadRequest("searchTerm is missing".to_string()))
    }
}

/// Quiz category selector: a bare id, or the `{"type", "id"}` object
/// front-ends post. Id 0 selects every category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuizCategoryField {
    Id(NumericField),
    Object {
        id: NumericField,
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
}

impl QuizCategoryField {
    pub fn scope(&self) -> ApiResult<CategoryScope> {
        let id = match self {
            QuizCategoryField::Id(id) => id,
            QuizCategoryField::Object { id, .. } => id,
        };

        id.as_i64()
            .map(CategoryScope::from_id)
            .ok_or_else(|| ApiError::BadRequest("quiz_category id is not an integer".to_string()))
    }
}

/// `POST /quizzes` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryField>,
}

impl QuizRequest {
    pub fn into_round(self) -> ApiResult<QuizRound> {
        let previous = self
            .previous_questions
            .ok_or_else(|| ApiError::BadRequest("previous_questions is missing".to_string()))?;
        let scope = self
            .quiz_category
            .ok_or_else(|| ApiError::BadRequest("quiz_category is missing".to_string()))?
            .scope()?;

        Ok(QuizRound::new(scope, previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(value: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_create_request() {
        let question = create_request(json!({
            "question": "What is the capital of Greece?",
            "answer": "Athens",
            "category": 3,
            "difficulty": 2
        }))
        .validate()
        .unwrap();

        assert_eq!(question.category, 3);
        assert_eq!(question.difficulty, 2);
    }

    #[test]
    fn test_string_numbers_accepted() {
        let question = create_request(json!({
            "question": "Q?",
            "answer": "A",
            "category": "4",
            "difficulty": " 5 "
        }))
        .validate()
        .unwrap();

        assert_eq!(question.category, 4);
        assert_eq!(question.difficulty, 5);
    }

    #[test]
    fn test_missing_and_blank_fields_rejected() {
        let missing = create_request(json!({"answer": "A", "category": 1, "difficulty": 1}));
        assert!(matches!(missing.validate(), Err(ApiError::Unprocessable(_))));

        let blank = create_request(json!({
            "question": "   ",
            "answer": "A",
            "category": 1,
            "difficulty": 1
        }));
        assert!(matches!(blank.validate(), Err(ApiError::Unprocessable(_))));

        let not_a_number = create_request(json!({
            "question": "Q?",
            "answer": "A",
            "category": "science",
            "difficulty": 1
        }));
        assert!(matches!(not_a_number.validate(), Err(ApiError::Unprocessable(_))));
    }

    #[test]
    fn test_difficulty_range() {
        let too_hard = create_request(json!({
            "question": "Q?",
            "answer": "A",
            "category": 1,
            "difficulty": 6
        }));
        assert!(matches!(too_hard.validate(), Err(ApiError::Unprocessable(_))));
    }

    #[test]
    fn test_search_term_aliases() {
        let camel: SearchRequest = serde_json::from_value(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(camel.term().unwrap(), "title");

        let snake: SearchRequest = serde_json::from_value(json!({"search_term": ""})).unwrap();
        assert_eq!(snake.term().unwrap(), "");

        let missing: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(missing.term(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_quiz_category_shapes() {
        let object: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [1, 2],
            "quiz_category": {"type": "click", "id": 0}
        }))
        .unwrap();
        let round = object.into_round().unwrap();
        assert_eq!(round.scope, CategoryScope::Any);
        assert_eq!(round.previous.len(), 2);

        let bare: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": "4"
        }))
        .unwrap();
        assert_eq!(bare.into_round().unwrap().scope, CategoryScope::Only(4));
    }

    #[test]
    fn test_quiz_fields_required() {
        let empty: QuizRequest = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(empty.into_round(), Err(ApiError::BadRequest(_))));

        let no_category: QuizRequest =
            serde_json::from_value(json!({"previous_questions": []})).unwrap();
        assert!(matches!(no_category.into_round(), Err(ApiError::BadRequest(_))));
    }
}
