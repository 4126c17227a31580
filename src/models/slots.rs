use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SlotsResponse {
    pub doctor: String,
    pub available_slots: Vec<String>,
}
