//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::timetable::Departure;

/// Query parameters for the next-trains lookup.
///
/// Every field is required. They are modeled as options so the handler
/// can reject missing or empty parameters with one message, before
/// anything is fetched from the timetable source.
#[derive(Debug, Deserialize)]
pub struct NextTrainsQuery {
    /// Boarding station; must match a header column of the sheet
    pub source: Option<String>,

    /// Alighting station; must match a header column of the sheet
    pub destination: Option<String>,

    /// Sheet name identifying the route (e.g. "Ghatkopar-Versova")
    pub path: Option<String>,

    /// Reference time, "HH:MM" or "HH:MM:SS"
    pub time: Option<String>,
}

/// One upcoming train in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainResult {
    /// Departure time at the source station, as written in the sheet
    pub departure: String,

    /// Arrival time at the destination station, as written in the sheet
    pub arrival: String,
}

/// Response for the next-trains lookup.
///
/// Always exactly three slots, in departure order; slots past the end
/// of the day's timetable are `null`.
#[derive(Debug, Serialize)]
pub struct NextTrainsResponse {
    pub train1: Option<TrainResult>,
    pub train2: Option<TrainResult>,
    pub train3: Option<TrainResult>,
}

impl NextTrainsResponse {
    /// Fill the three slots from the upcoming departures, soonest first.
    pub fn from_departures(departures: Vec<Departure>) -> Self {
        let mut trains = departures.into_iter().map(|d| TrainResult {
            departure: d.departure,
            arrival: d.arrival,
        });

        Self {
            train1: trains.next(),
            train2: trains.next(),
            train3: trains.next(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departure(dep: &str, arr: &str) -> Departure {
        Departure {
            departure: dep.to_string(),
            arrival: arr.to_string(),
        }
    }

    #[test]
    fn fills_slots_in_order() {
        let response = NextTrainsResponse::from_departures(vec![
            departure("08:00", "08:30"),
            departure("09:00", "09:30"),
        ]);

        assert_eq!(
            response.train1,
            Some(TrainResult {
                departure: "08:00".into(),
                arrival: "08:30".into(),
            })
        );
        assert_eq!(
            response.train2,
            Some(TrainResult {
                departure: "09:00".into(),
                arrival: "09:30".into(),
            })
        );
        assert_eq!(response.train3, None);
    }

    #[test]
    fn truncates_to_three() {
        let response = NextTrainsResponse::from_departures(vec![
            departure("08:00", "08:30"),
            departure("09:00", "09:30"),
            departure("10:00", "10:30"),
            departure("11:00", "11:30"),
        ]);

        assert_eq!(response.train1.unwrap().departure, "08:00");
        assert_eq!(response.train2.unwrap().departure, "09:00");
        assert_eq!(response.train3.unwrap().departure, "10:00");
    }

    #[test]
    fn empty_means_three_nulls() {
        let response = NextTrainsResponse::from_departures(vec![]);

        assert_eq!(response.train1, None);
        assert_eq!(response.train2, None);
        assert_eq!(response.train3, None);
    }

    #[test]
    fn empty_slots_serialize_as_null() {
        let response = NextTrainsResponse::from_departures(vec![departure("08:00", "08:30")]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["train1"]["departure"], "08:00");
        assert_eq!(json["train1"]["arrival"], "08:30");
        assert!(json["train2"].is_null());
        assert!(json["train3"].is_null());

        // All three keys are present even when null
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
    }
}
