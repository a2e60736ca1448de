//! End-of-run message emitted across the host boundary
//!
//! The core produces a final score and a raw interaction trace; validating
//! or persisting them is strictly the host's concern. The JSON shape is the
//! host-facing wire contract:
//!
//! ```json
//! { "type": "GAME_OVER", "score": 3,
//!   "biometrics": { "duration": 6120.0, "clickOffsets": [0.2, -0.1, 0.4] } }
//! ```
//!
//! `biometrics` is present only when `score > 0`: a scoreless run is not
//! worth recording, and an aborted run emits nothing at all.

use serde::{Deserialize, Serialize};

use crate::sim::Session;

/// Per-run interaction trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    /// Run duration in milliseconds
    pub duration: f64,
    /// Signed positional delta of every successful commit, in order
    #[serde(rename = "clickOffsets")]
    pub click_offsets: Vec<f32>,
}

/// The single outward event on run termination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biometrics: Option<Biometrics>,
}

impl GameOverMessage {
    pub const MESSAGE_TYPE: &'static str = "GAME_OVER";

    /// Build the termination message for a session, or `None` when the run
    /// scored 0 (including forced aborts).
    pub fn from_session(session: &Session) -> Option<Self> {
        let score = session.score();
        if score == 0 {
            return None;
        }
        Some(Self {
            message_type: Self::MESSAGE_TYPE.to_string(),
            score,
            biometrics: Some(Biometrics {
                duration: session.elapsed_ms,
                click_offsets: session.click_offsets.clone(),
            }),
        })
    }
}
