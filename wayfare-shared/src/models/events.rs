use uuid::Uuid;

use crate::models::flight::CabinClass;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchPerformedEvent {
    pub search_id: Uuid,
    pub from: Vec<String>,
    pub to: Vec<String>,
    pub cabin_class: CabinClass,
    pub trip_type: String,
    pub result_count: usize,
    /// "fixture" or "generated"
    pub source: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct FlightsGeneratedEvent {
    pub request_id: Uuid,
    pub routes: Vec<(String, String)>,
    pub requested: usize,
    pub produced: usize,
    pub timestamp: i64,
}

impl SearchPerformedEvent {
    pub fn new(
        from: Vec<String>,
        to: Vec<String>,
        cabin_class: CabinClass,
        trip_type: &str,
        result_count: usize,
        source: &str,
    ) -> Self {
        Self {
            search_id: Uuid::new_v4(),
            from,
            to,
            cabin_class,
            trip_type: trip_type.to_string(),
            result_count,
            source: source.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl FlightsGeneratedEvent {
    pub fn new(routes: Vec<(String, String)>, requested: usize, produced: usize) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            routes,
            requested,
            produced,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
