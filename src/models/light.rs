use serde::Deserialize;

/// A light known to the bridge. Owned by the bridge; this program only
/// reads and commands it.
#[derive(Debug, Clone)]
pub struct Light {
    pub id: String,
    pub name: String,
    pub state: LightState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightState {
    pub on: bool,
    #[serde(default)]
    pub bri: Option<u8>,
    #[serde(default)]
    pub xy: Option<[f64; 2]>,
}

/// Per-light record as returned by `GET /api/{token}/lights`, keyed by id
/// in the enclosing map.
#[derive(Debug, Clone, Deserialize)]
pub struct LightAttributes {
    pub name: String,
    pub state: LightState,
}

impl Light {
    pub fn from_attributes(id: String, attributes: LightAttributes) -> Self {
        Self {
            id,
            name: attributes.name,
            state: attributes.state,
        }
    }
}
