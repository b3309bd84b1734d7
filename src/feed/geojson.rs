use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fetched FeatureCollection. Only `features` is required.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedDocument {
    pub features: Vec<FeatureRecord>,
}

/// Wire form of a feature, kept as raw JSON so one bad record cannot reject
/// the whole document. `Feature::from_record` does the validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FeatureRecord(pub Value);

impl FeatureRecord {
    /// String or number per RFC 7946; anything else is passed through.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn coordinates(&self) -> Option<&[Value]> {
        self.0
            .get("geometry")
            .and_then(|g| g.get("coordinates"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.0.get("properties").and_then(|p| p.get(key))
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.property("mag").and_then(Value::as_f64)
    }

    pub fn url(&self) -> Option<&str> {
        self.property("url").and_then(Value::as_str)
    }
}

/// A validated earthquake event.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: f64,
    pub magnitude: f64,
    pub detail_url: Option<String>,
}

impl Feature {
    pub fn from_record(record: &FeatureRecord) -> Result<Self> {
        let coords = record
            .coordinates()
            .ok_or_else(|| anyhow!("missing coordinates"))?;
        if coords.len() < 3 {
            return Err(anyhow!("expected 3 coordinates, got {}", coords.len()));
        }
        let axis = |i: usize, name: &str| {
            coords[i]
                .as_f64()
                .ok_or_else(|| anyhow!("non-numeric {}: {}", name, coords[i]))
        };
        let longitude = axis(0, "longitude")?;
        let latitude = axis(1, "latitude")?;
        let depth_km = axis(2, "depth")?;
        let magnitude = record
            .magnitude()
            .ok_or_else(|| anyhow!("missing or non-numeric magnitude"))?;
        Ok(Self {
            longitude,
            latitude,
            depth_km,
            magnitude,
            detail_url: record.url().map(str::to_string),
        })
    }

    /// Marker position in the map's (lat, lon) order.
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
