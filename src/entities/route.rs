use serde::{Deserialize, Serialize};

/// A stop along a route. `sequence` starts at 1 and follows travel order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub station_id: String,
    pub sequence: u32,
}

impl RouteStop {
    /// Number station ids in the order given
    pub fn sequence_of<I, S>(station_ids: I) -> Vec<RouteStop>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        station_ids
            .into_iter()
            .zip(1..)
            .map(|(id, sequence)| RouteStop {
                station_id: id.into(),
                sequence,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Kilometres
    pub distance: f64,
    /// Minutes
    pub duration: u32,
    #[serde(default)]
    pub pickup_stops: Vec<RouteStop>,
    #[serde(default)]
    pub dropoff_stops: Vec<RouteStop>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub duration: u32,
    pub pickup_stops: Vec<RouteStop>,
    pub dropoff_stops: Vec<RouteStop>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_stops: Option<Vec<RouteStop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_stops: Option<Vec<RouteStop>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_follows_given_order() {
        let stops = RouteStop::sequence_of(["st-9", "st-2", "st-5"]);
        let ids: Vec<_> = stops.iter().map(|s| s.station_id.as_str()).collect();
        let seqs: Vec<_> = stops.iter().map(|s| s.sequence).collect();
        assert_eq!(ids, vec!["st-9", "st-2", "st-5"]);
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    #[test]
    fn test_route_keeps_stop_order_from_server() {
        let json = r#"{
            "id": "r1", "origin": "Sai Gon", "destination": "Da Lat",
            "distance": 308.5, "duration": 420,
            "pickupStops": [
                {"stationId": "b", "sequence": 2},
                {"stationId": "a", "sequence": 1}
            ]
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.pickup_stops[0].station_id, "b");
        assert!(route.dropoff_stops.is_empty());
    }
}
