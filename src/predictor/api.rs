use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    errors::PrawncastError,
    fields::FieldId,
    form::FieldSet,
};

/// Fixed predictor endpoint. The service is an opaque collaborator; there is
/// no configuration or environment override for it.
pub const PREDICT_URL: &str = "https://shrimp-yield-prediction-backend.onrender.com/predict";

/// Service root, used only for reachability pings.
pub const SERVICE_ROOT_URL: &str = "https://shrimp-yield-prediction-backend.onrender.com/";

/// Wire payload for one prediction request. Field order matches the form;
/// the renames preserve the mixed-case keys the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub prawn_density_per_m2: f64,
    pub feed_quality_index: f64,
    pub water_exchange_per_month: f64,
    #[serde(rename = "DO_mg_L")]
    pub do_mg_l: f64,
    #[serde(rename = "temperature_C")]
    pub temperature_c: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    #[serde(rename = "ammonia_mg_L")]
    pub ammonia_mg_l: f64,
    #[serde(rename = "nitrite_mg_L")]
    pub nitrite_mg_l: f64,
    #[serde(rename = "H2S_mg_L")]
    pub h2s_mg_l: f64,
    pub turbidity_cm: f64,
    pub salinity_ppt: f64,
    pub pond_size_ha: f64,
    pub recycling_efficiency_pct: f64,
}

impl Payload {
    /// Interprets the raw form text as numbers. Built fresh at submission
    /// time and never stored; the form text stays the source of truth.
    ///
    /// Fails on the first field that is not a finite number. Surrounding
    /// whitespace is forgiven, everything else is not.
    pub fn from_fields(fields: &FieldSet) -> Result<Self, PrawncastError> {
        Ok(Payload {
            prawn_density_per_m2: parse_field(fields, FieldId::PrawnDensity)?,
            feed_quality_index: parse_field(fields, FieldId::FeedQuality)?,
            water_exchange_per_month: parse_field(fields, FieldId::WaterExchange)?,
            do_mg_l: parse_field(fields, FieldId::DissolvedOxygen)?,
            temperature_c: parse_field(fields, FieldId::Temperature)?,
            ph: parse_field(fields, FieldId::Ph)?,
            ammonia_mg_l: parse_field(fields, FieldId::Ammonia)?,
            nitrite_mg_l: parse_field(fields, FieldId::Nitrite)?,
            h2s_mg_l: parse_field(fields, FieldId::HydrogenSulfide)?,
            turbidity_cm: parse_field(fields, FieldId::Turbidity)?,
            salinity_ppt: parse_field(fields, FieldId::Salinity)?,
            pond_size_ha: parse_field(fields, FieldId::PondSize)?,
            recycling_efficiency_pct: parse_field(fields, FieldId::RecyclingEfficiency)?,
        })
    }
}

fn parse_field(fields: &FieldSet, id: FieldId) -> Result<f64, PrawncastError> {
    let raw = fields.get(id).trim();
    let invalid = || PrawncastError::Validation {
        field: id.label(),
        value: raw.to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;

    // f64::parse accepts "NaN" and "inf", but JSON numbers cannot carry
    // them (serde_json would serialize null).
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}

/// Successful response body: a single numeric prediction. Unknown extra
/// fields are tolerated, a missing or non-numeric prediction is not.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

/// Runs one full request cycle against the predictor and classifies the
/// outcome: transport failure, non-2xx status, undecodable body, or a value.
pub async fn request_prediction(client: &Client, payload: &Payload) -> Result<f64, PrawncastError> {
    let response = client.post(PREDICT_URL).json(payload).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(PrawncastError::BadStatus(status));
    }

    // Read the body as text first so a decode failure is clearly a
    // malformed response rather than a transport error.
    let body = response.text().await?;
    let parsed: PredictionResponse = serde_json::from_str(&body)?;

    Ok(parsed.prediction)
}

/// Cheap reachability probe against the service root. Feeds the status
/// indicator only; submissions go out regardless of what this returns.
pub fn ping_service() -> bool {
    match reqwest::blocking::get(SERVICE_ROOT_URL) {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set(FieldId::PrawnDensity, "15.0");
        fields.set(FieldId::FeedQuality, "0.85");
        fields.set(FieldId::WaterExchange, "6");
        fields.set(FieldId::DissolvedOxygen, "5.8");
        fields.set(FieldId::Temperature, "29.5");
        fields.set(FieldId::Ph, "7.6");
        fields.set(FieldId::Ammonia, "0.15");
        fields.set(FieldId::Nitrite, "0.08");
        fields.set(FieldId::HydrogenSulfide, "0.03");
        fields.set(FieldId::Turbidity, "40");
        fields.set(FieldId::Salinity, "18");
        fields.set(FieldId::PondSize, "0.8");
        fields.set(FieldId::RecyclingEfficiency, "65");
        fields
    }

    #[test]
    fn from_fields_parses_every_value() {
        let payload = Payload::from_fields(&filled_fields()).unwrap();

        assert_eq!(payload.prawn_density_per_m2, 15.0);
        assert_eq!(payload.feed_quality_index, 0.85);
        assert_eq!(payload.water_exchange_per_month, 6.0);
        assert_eq!(payload.do_mg_l, 5.8);
        assert_eq!(payload.temperature_c, 29.5);
        assert_eq!(payload.ph, 7.6);
        assert_eq!(payload.ammonia_mg_l, 0.15);
        assert_eq!(payload.nitrite_mg_l, 0.08);
        assert_eq!(payload.h2s_mg_l, 0.03);
        assert_eq!(payload.turbidity_cm, 40.0);
        assert_eq!(payload.salinity_ppt, 18.0);
        assert_eq!(payload.pond_size_ha, 0.8);
        assert_eq!(payload.recycling_efficiency_pct, 65.0);
    }

    #[test]
    fn from_fields_trims_surrounding_whitespace() {
        let mut fields = filled_fields();
        fields.set(FieldId::Ph, "  7.6 ");

        let payload = Payload::from_fields(&fields).unwrap();
        assert_eq!(payload.ph, 7.6);
    }

    #[test]
    fn from_fields_rejects_non_numeric_text() {
        for bad in ["", "abc", "7.5abc", "1,5", "--3"] {
            let mut fields = filled_fields();
            fields.set(FieldId::Ammonia, bad);

            let error = Payload::from_fields(&fields).unwrap_err();
            match error {
                PrawncastError::Validation { field, value } => {
                    assert_eq!(field, "Ammonia (mg/L)");
                    assert_eq!(value, bad);
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn from_fields_rejects_non_finite_numbers() {
        for bad in ["NaN", "inf", "-inf", "infinity"] {
            let mut fields = filled_fields();
            fields.set(FieldId::PondSize, bad);
            assert!(Payload::from_fields(&fields).is_err(), "{:?} should not submit", bad);
        }
    }

    #[test]
    fn payload_serializes_with_exact_wire_keys() {
        let payload = Payload::from_fields(&filled_fields()).unwrap();
        let json = serde_json::to_string(&payload).unwrap();

        // One entry per field and no stray keys.
        assert_eq!(json.matches("\":").count(), FieldId::COUNT);

        // Keys appear spelled exactly as the service expects, in form order.
        let mut previous = 0;
        for id in FieldId::ALL {
            let needle = format!("\"{}\":", id.key());
            let position = match json.find(&needle) {
                Some(position) => position,
                None => panic!("payload is missing key {}", id.key()),
            };
            assert!(position >= previous, "{} is out of order", id.key());
            previous = position;
        }
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = Payload::from_fields(&filled_fields()).unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        let back: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn response_requires_a_numeric_prediction() {
        let parsed: PredictionResponse = serde_json::from_str(r#"{"prediction": 82.5}"#).unwrap();
        assert_eq!(parsed.prediction, 82.5);

        // Extra fields are fine; the prediction is all we read.
        let parsed: PredictionResponse =
            serde_json::from_str(r#"{"prediction": 7, "model": "rf"}"#).unwrap();
        assert_eq!(parsed.prediction, 7.0);

        assert!(serde_json::from_str::<PredictionResponse>("{}").is_err());
        assert!(serde_json::from_str::<PredictionResponse>(r#"{"prediction": "high"}"#).is_err());
        assert!(serde_json::from_str::<PredictionResponse>("[82.5]").is_err());
        assert!(serde_json::from_str::<PredictionResponse>("not json").is_err());
    }
}
