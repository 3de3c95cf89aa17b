use serde::{Deserialize, Serialize};

/// Fixed grid description of a bus body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatLayout {
    pub rows: u32,
    pub cols: u32,
    pub decks: u32,
}

/// One seat code placed on the grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub code: String,
    pub row: u32,
    pub col: u32,
    pub deck: u32,
}

impl Seat {
    pub fn new(code: impl Into<String>, row: u32, col: u32, deck: u32) -> Self {
        Self {
            code: code.into(),
            row,
            col,
            deck,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: String,
    pub plate_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SeatLayout>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusRequest {
    pub plate_number: String,
    pub bus_model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusModel {
    pub id: String,
    pub name: String,
    pub layout: SeatLayout,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusModelRequest {
    pub name: String,
    pub layout: SeatLayout,
    pub seats: Vec<Seat>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<SeatLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<Seat>>,
}
