use serde::{Deserialize, Serialize};

/// One real-estate record returned by the remote service.
///
/// The state machine treats listings as opaque values and only manages the
/// collection; the fields exist so the payload can be decoded and rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(rename = "imgSrcUrl")]
    pub img_src_url: String,
    /// "rent" or "buy" in the upstream payload.
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}
