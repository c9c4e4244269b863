use crate::domain::{Incident, Severity};
use crate::error::AppError;
use crate::normalize::dates::parse_timestamp_utc;
use crate::store::IncidentStore;

// Fixed demo records shown on first load. Timestamps carry no zone and are read as UTC.
const SEED: [(i64, &str, Severity, &str, &str); 4] = [
    (
        1,
        "Biased Recommendation Algorithm",
        Severity::Medium,
        "2025-03-15T15:30:00",
        "The recommendation algorithm was found to favor certain types of content over others, which could lead to biased decision-making in AI systems.",
    ),
    (
        2,
        "LLM Hallucination in Critical Info",
        Severity::High,
        "2025-04-01T20:00:00",
        "The AI model generated inaccurate responses in critical scenarios, such as medical and legal queries, potentially causing harm.",
    ),
    (
        3,
        "Minor Data Leak via Chatbot",
        Severity::Low,
        "2025-03-20T14:45:00",
        "A chatbot inadvertently shared personal data due to improper security measures, exposing minimal user information.",
    ),
    (
        4,
        "Data Privacy Breach via AI",
        Severity::Critical,
        "2025-01-30T13:20:00",
        "A serious breach occurred when an AI system mishandled sensitive user data, exposing it to unauthorized access.",
    ),
];

pub fn seed_incidents() -> Result<Vec<Incident>, AppError> {
    SEED.iter()
        .map(|&(id, title, severity, reported_at, description)| -> Result<Incident, AppError> {
            let reported_at = parse_timestamp_utc(reported_at)
                .ok_or_else(|| AppError::seed_timestamp_invalid(id, reported_at))?;
            Ok(Incident {
                id,
                title: title.to_string(),
                severity,
                reported_at,
                description: description.to_string(),
            })
        })
        .collect()
}

pub fn seed_store() -> Result<IncidentStore, AppError> {
    Ok(IncidentStore::from_incidents(seed_incidents()?))
}
