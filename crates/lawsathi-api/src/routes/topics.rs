use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicCategory {
    pub category: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PopularTopicsResponse {
    pub topics: Vec<TopicCategory>,
}

const POPULAR_TOPICS: &[(&str, [&str; 3])] = &[
    (
        "Constitutional Rights",
        [
            "What are my fundamental rights as an Indian citizen?",
            "How can I file a complaint if my rights are violated?",
            "What is the right to information (RTI)?",
        ],
    ),
    (
        "Government Schemes",
        [
            "How do I apply for PM-KISAN scheme?",
            "What documents do I need for Aadhar card?",
            "How to get a ration card?",
        ],
    ),
    (
        "Property & Land",
        [
            "How do I check my land records online?",
            "What is the process for property registration?",
            "What are my rights as a tenant?",
        ],
    ),
    (
        "Family & Marriage",
        [
            "What are the legal requirements for marriage?",
            "How do I file for divorce?",
            "What are women's rights in marriage?",
        ],
    ),
    (
        "Employment & Labor",
        [
            "What are my rights as an employee?",
            "How do I file a complaint against my employer?",
            "What is the minimum wage law?",
        ],
    ),
];

/// Quick-start questions grouped by legal area
#[utoipa::path(
    get,
    path = "/api/popular-topics",
    responses(
        (status = 200, description = "Topic catalog", body = PopularTopicsResponse)
    ),
    tag = "topics"
)]
pub async fn popular_topics() -> Json<PopularTopicsResponse> {
    let topics = POPULAR_TOPICS
        .iter()
        .map(|(category, questions)| TopicCategory {
            category: category.to_string(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
        })
        .collect();

    Json(PopularTopicsResponse { topics })
}
