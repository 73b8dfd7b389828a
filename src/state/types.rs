//! Flight offer data model as delivered by the remote offers endpoint.
//!
//! Every nested object in the payload is optional: the endpoint is not under
//! our control and individual records are known to be incomplete. The
//! accessors on [`FlightOffer`] walk the nesting and return `None` as soon as
//! any intermediate object is absent, so callers never have to care which
//! level was missing.

use crate::util::{de_lenient_f64, de_lenient_string};

/// Response envelope returned by the offers endpoint: `{ "data": { "result": [...] } }`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct OffersEnvelope {
    /// Wrapper object holding the result list.
    pub data: OffersData,
}

/// Inner `data` object of [`OffersEnvelope`].
#[derive(Clone, Debug, serde::Deserialize)]
pub struct OffersData {
    /// Offers in the order the endpoint returned them.
    pub result: Vec<FlightOffer>,
}

/// One flight itinerary record.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    /// Price of the offer. Numeric strings are accepted.
    #[serde(
        default,
        deserialize_with = "de_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub fare: Option<f64>,
    /// Display block with airline, airports and stop information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_data: Option<DisplayData>,
}

/// Presentation data attached to an offer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayData {
    /// Operating airlines; only the first entry is displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airlines: Option<Vec<Airline>>,
    /// Departure side of the itinerary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Endpoint>,
    /// Arrival side of the itinerary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Endpoint>,
    /// Stop summary, e.g. "Non stop" or "1 stop".
    #[serde(
        default,
        deserialize_with = "de_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_info: Option<String>,
    /// Human readable total duration, e.g. "2h 10m".
    #[serde(
        default,
        deserialize_with = "de_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_duration: Option<String>,
}

/// Airline entry of [`DisplayData::airlines`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    /// Marketing name of the airline.
    #[serde(
        default,
        deserialize_with = "de_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub airline_name: Option<String>,
    /// Flight number; numeric JSON values are rendered as text.
    #[serde(
        default,
        deserialize_with = "de_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub flight_number: Option<String>,
}

/// Departure or arrival side of an itinerary.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    /// Airport the itinerary leaves from or arrives at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport: Option<Airport>,
}

/// Airport descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    /// IATA code, e.g. "DEL".
    #[serde(
        default,
        deserialize_with = "de_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub airport_code: Option<String>,
}

impl FlightOffer {
    /// What: Return the first airline entry, if the nesting is complete.
    ///
    /// Output:
    /// - `Some(&Airline)` when `displayData.airlines[0]` exists; `None` otherwise.
    #[must_use]
    pub fn first_airline(&self) -> Option<&Airline> {
        self.display_data.as_ref()?.airlines.as_ref()?.first()
    }

    /// Name of the first airline.
    #[must_use]
    pub fn airline_name(&self) -> Option<&str> {
        self.first_airline()?.airline_name.as_deref()
    }

    /// Flight number of the first airline.
    #[must_use]
    pub fn flight_number(&self) -> Option<&str> {
        self.first_airline()?.flight_number.as_deref()
    }

    /// Departure airport code.
    #[must_use]
    pub fn departure_code(&self) -> Option<&str> {
        self.display_data
            .as_ref()?
            .source
            .as_ref()?
            .airport
            .as_ref()?
            .airport_code
            .as_deref()
    }

    /// Arrival airport code.
    #[must_use]
    pub fn arrival_code(&self) -> Option<&str> {
        self.display_data
            .as_ref()?
            .destination
            .as_ref()?
            .airport
            .as_ref()?
            .airport_code
            .as_deref()
    }

    /// What: Build the combined stop/duration label.
    ///
    /// Output:
    /// - `Some("<stopInfo>/(<totalDuration>)")` when the display block exists, with
    ///   absent parts left blank; `None` when there is no display block at all.
    #[must_use]
    pub fn stop_duration(&self) -> Option<String> {
        let d = self.display_data.as_ref()?;
        Some(format!(
            "{}/({})",
            d.stop_info.as_deref().unwrap_or_default(),
            d.total_duration.as_deref().unwrap_or_default()
        ))
    }
}

/// Field the visible list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// No ordering requested; fetch order is kept.
    #[default]
    None,
    /// Ascending by fare.
    Fare,
    /// Ascending by first airline name.
    Airline,
}

impl SortKey {
    /// Short lowercase name used in logs and the footer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fare => "fare",
            Self::Airline => "airline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Complete records expose every displayed field through the accessors
    fn accessors_read_complete_record() {
        let json = r#"{
            "fare": 4312,
            "displayData": {
                "airlines": [{"airlineName": "IndiGo", "flightNumber": "6E 2131"}],
                "source": {"airport": {"airportCode": "DEL", "cityName": "Delhi"}},
                "destination": {"airport": {"airportCode": "BOM"}},
                "stopInfo": "Non stop",
                "totalDuration": "2h 10m"
            }
        }"#;
        let offer: FlightOffer = serde_json::from_str(json).expect("valid offer");
        assert_eq!(offer.fare, Some(4312.0));
        assert_eq!(offer.airline_name(), Some("IndiGo"));
        assert_eq!(offer.flight_number(), Some("6E 2131"));
        assert_eq!(offer.departure_code(), Some("DEL"));
        assert_eq!(offer.arrival_code(), Some("BOM"));
        assert_eq!(offer.stop_duration().as_deref(), Some("Non stop/(2h 10m)"));
    }

    #[test]
    /// What: Missing intermediate objects yield `None` instead of failing
    fn accessors_tolerate_missing_nesting() {
        let offer: FlightOffer = serde_json::from_str(r#"{"fare": 99}"#).expect("valid offer");
        assert_eq!(offer.airline_name(), None);
        assert_eq!(offer.departure_code(), None);
        assert_eq!(offer.stop_duration(), None);

        let offer: FlightOffer =
            serde_json::from_str(r#"{"displayData": {"airlines": [], "source": {}}}"#)
                .expect("valid offer");
        assert_eq!(offer.fare, None);
        assert_eq!(offer.flight_number(), None);
        assert_eq!(offer.departure_code(), None);
        assert_eq!(offer.stop_duration().as_deref(), Some("/()"));
    }

    #[test]
    /// What: Loosely typed scalars are coerced the way the table displays them
    fn lenient_scalars() {
        let json = r#"{
            "fare": "1250.5",
            "displayData": {"airlines": [{"airlineName": null, "flightNumber": 815}]}
        }"#;
        let offer: FlightOffer = serde_json::from_str(json).expect("valid offer");
        assert_eq!(offer.fare, Some(1250.5));
        assert_eq!(offer.airline_name(), None);
        assert_eq!(offer.flight_number(), Some("815"));

        let offer: FlightOffer =
            serde_json::from_str(r#"{"fare": "cheap"}"#).expect("valid offer");
        assert_eq!(offer.fare, None);
    }

    #[test]
    /// What: The envelope requires `data.result`
    fn envelope_requires_result() {
        let ok: OffersEnvelope =
            serde_json::from_str(r#"{"data": {"result": [{"fare": 1}]}}"#).expect("envelope");
        assert_eq!(ok.data.result.len(), 1);
        assert!(serde_json::from_str::<OffersEnvelope>(r#"{"data": {}}"#).is_err());
        assert!(serde_json::from_str::<OffersEnvelope>(r#"{"result": []}"#).is_err());
    }
}
