use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Property holding the locality code in the NSW locality boundary layer
pub const DEFAULT_ID_PROPERTY: &str = "nsw_loca_2";

/// GeoJSON feature; only `properties` is inspected, the rest is carried as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// `null` or absent in features without attributes
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Feature {
    /// Locality code stored under `id_property`, if it is a string
    pub fn locality_id(&self, id_property: &str) -> Option<&str> {
        self.properties.as_ref()?.get(id_property).and_then(Value::as_str)
    }
}

/// GeoJSON feature collection of locality boundaries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Collection-level members (`type`, `crs`, `name`, ...)
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Keep only the features whose locality code is in `locality_ids`
///
/// Feature order and collection metadata are preserved. An empty selection
/// yields an empty feature list.
pub fn trim_boundaries<I, S>(
    collection: &FeatureCollection,
    locality_ids: I,
    id_property: &str,
) -> FeatureCollection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: HashSet<String> = locality_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();

    let features = collection
        .features
        .iter()
        .filter(|feature| {
            feature
                .locality_id(id_property)
                .is_some_and(|id| selected.contains(id))
        })
        .cloned()
        .collect();

    FeatureCollection {
        features,
        metadata: collection.metadata.clone(),
    }
}
