/// The thirteen pond measurements the predictor model was trained on.
///
/// Declaration order matches the wire payload, which mirrors the order the
/// form presents them in. Everything about a field (wire key, label, helper
/// texts) is static data hanging off this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PrawnDensity,
    FeedQuality,
    WaterExchange,
    DissolvedOxygen,
    Temperature,
    Ph,
    Ammonia,
    Nitrite,
    HydrogenSulfide,
    Turbidity,
    Salinity,
    PondSize,
    RecyclingEfficiency,
}

impl FieldId {
    pub const COUNT: usize = 13;

    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::PrawnDensity,
        FieldId::FeedQuality,
        FieldId::WaterExchange,
        FieldId::DissolvedOxygen,
        FieldId::Temperature,
        FieldId::Ph,
        FieldId::Ammonia,
        FieldId::Nitrite,
        FieldId::HydrogenSulfide,
        FieldId::Turbidity,
        FieldId::Salinity,
        FieldId::PondSize,
        FieldId::RecyclingEfficiency,
    ];

    /// JSON key expected by the predictor service. Mixed casing is part of
    /// the wire contract, not a style choice.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::PrawnDensity => "prawn_density_per_m2",
            FieldId::FeedQuality => "feed_quality_index",
            FieldId::WaterExchange => "water_exchange_per_month",
            FieldId::DissolvedOxygen => "DO_mg_L",
            FieldId::Temperature => "temperature_C",
            FieldId::Ph => "pH",
            FieldId::Ammonia => "ammonia_mg_L",
            FieldId::Nitrite => "nitrite_mg_L",
            FieldId::HydrogenSulfide => "H2S_mg_L",
            FieldId::Turbidity => "turbidity_cm",
            FieldId::Salinity => "salinity_ppt",
            FieldId::PondSize => "pond_size_ha",
            FieldId::RecyclingEfficiency => "recycling_efficiency_pct",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::PrawnDensity => "Prawn Density per m²",
            FieldId::FeedQuality => "Feed Quality Index",
            FieldId::WaterExchange => "Water Exchange per Month",
            FieldId::DissolvedOxygen => "DO (mg/L)",
            FieldId::Temperature => "Temperature (°C)",
            FieldId::Ph => "pH",
            FieldId::Ammonia => "Ammonia (mg/L)",
            FieldId::Nitrite => "Nitrite (mg/L)",
            FieldId::HydrogenSulfide => "H2S (mg/L)",
            FieldId::Turbidity => "Turbidity (cm)",
            FieldId::Salinity => "Salinity (ppt)",
            FieldId::PondSize => "Pond Size (ha)",
            FieldId::RecyclingEfficiency => "Recycling Efficiency (%)",
        }
    }

    /// One-line explanation shown under the label.
    pub fn hint(self) -> &'static str {
        match self {
            FieldId::PrawnDensity => "Stocking density of shrimp in the pond",
            FieldId::FeedQuality => "Overall quality score of feed",
            FieldId::WaterExchange => "Number of full or partial exchanges",
            FieldId::DissolvedOxygen => "Dissolved oxygen level in the pond",
            FieldId::Temperature => "Average pond water temperature",
            FieldId::Ph => "Acidity/alkalinity of pond water",
            FieldId::Ammonia => "Unionized or total ammonia level",
            FieldId::Nitrite => "Nitrite concentration in water",
            FieldId::HydrogenSulfide => "Hydrogen sulfide level",
            FieldId::Turbidity => "Secchi disk visibility depth",
            FieldId::Salinity => "Salt concentration in water",
            FieldId::PondSize => "Surface area of the pond",
            FieldId::RecyclingEfficiency => "Efficiency of water treatment and reuse",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::PrawnDensity => "e.g. 15.0",
            FieldId::FeedQuality => "e.g. 0.85",
            FieldId::WaterExchange => "e.g. 6",
            FieldId::DissolvedOxygen => "e.g. 5.8",
            FieldId::Temperature => "e.g. 29.5",
            FieldId::Ph => "e.g. 7.6",
            FieldId::Ammonia => "e.g. 0.15",
            FieldId::Nitrite => "e.g. 0.08",
            FieldId::HydrogenSulfide => "e.g. 0.03",
            FieldId::Turbidity => "e.g. 40",
            FieldId::Salinity => "e.g. 18",
            FieldId::PondSize => "e.g. 0.8",
            FieldId::RecyclingEfficiency => "e.g. 65",
        }
    }

    /// Recommended range from the training data, shown under the input.
    /// Advisory only; out-of-range values are still submitted.
    pub fn range_text(self) -> &'static str {
        match self {
            FieldId::PrawnDensity => "Range: 5-40 prawn/m²",
            FieldId::FeedQuality => "Range: 0.4-1.0",
            FieldId::WaterExchange => "Range: 1-12 times/month",
            FieldId::DissolvedOxygen => "Range: 3.5-8.0 mg/L",
            FieldId::Temperature => "Range: 24-34°C",
            FieldId::Ph => "Range: 6.8-8.5",
            FieldId::Ammonia => "Range: 0.01-1.2 mg/L",
            FieldId::Nitrite => "Range: 0.01-0.6 mg/L",
            FieldId::HydrogenSulfide => "Range: 0-0.15 mg/L",
            FieldId::Turbidity => "Range: 20-80 cm",
            FieldId::Salinity => "Range: 5-35 ppt",
            FieldId::PondSize => "Range: 0.1-2.0 ha",
            FieldId::RecyclingEfficiency => "Range: 40-90%",
        }
    }

    /// Position within [`Self::ALL`]; used to index per-field storage.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<FieldId> {
        FieldId::ALL.iter().copied().find(|id| id.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_field_once() {
        assert_eq!(FieldId::ALL.len(), FieldId::COUNT);
        for (position, id) in FieldId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn wire_keys_are_exact_and_ordered() {
        let expected = [
            "prawn_density_per_m2",
            "feed_quality_index",
            "water_exchange_per_month",
            "DO_mg_L",
            "temperature_C",
            "pH",
            "ammonia_mg_L",
            "nitrite_mg_L",
            "H2S_mg_L",
            "turbidity_cm",
            "salinity_ppt",
            "pond_size_ha",
            "recycling_efficiency_pct",
        ];

        let actual: Vec<&str> = FieldId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn from_key_round_trips() {
        for id in FieldId::ALL {
            assert_eq!(FieldId::from_key(id.key()), Some(id));
        }
        assert_eq!(FieldId::from_key("do_mg_l"), None); // casing matters
        assert_eq!(FieldId::from_key(""), None);
    }

    #[test]
    fn every_field_has_display_texts() {
        for id in FieldId::ALL {
            assert!(!id.label().is_empty());
            assert!(!id.hint().is_empty());
            assert!(id.placeholder().starts_with("e.g. "));
            assert!(id.range_text().starts_with("Range: "));
        }
    }
}
