//! Error-correction strength selection.
//!
//! QR symbols carry Reed-Solomon redundancy at one of four tiers. Higher tiers
//! survive more damage but leave less room for data, so a payload that fits at
//! [`RecoveryLevel::Low`] may overflow at [`RecoveryLevel::Highest`].

use log::debug;
use qrcode::EcLevel;

/// The QR error-correction tier used when generating a symbol.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecoveryLevel {
    /// About 7% of codewords can be restored.
    Low,
    /// About 15% of codewords can be restored.
    #[default]
    Medium,
    /// About 25% of codewords can be restored.
    High,
    /// About 30% of codewords can be restored.
    Highest,
}

impl RecoveryLevel {
    /// Maps a user token to a level, ignoring ASCII case.
    ///
    /// Accepts `low`, `medium`, `high` and `highest`. Anything else falls back
    /// to [`RecoveryLevel::Medium`]; the fallback is never rejected. Use
    /// [`RecoveryLevel::parse`] to tell the two cases apart.
    ///
    /// # Example
    ///
    /// ```rust
    /// use file2qr::recovery::RecoveryLevel;
    ///
    /// assert_eq!(RecoveryLevel::from_token("HIGH"), RecoveryLevel::High);
    /// assert_eq!(RecoveryLevel::from_token("extreme"), RecoveryLevel::Medium);
    /// ```
    pub fn from_token(token: &str) -> Self {
        Self::parse(token).unwrap_or_else(|| {
            debug!("unrecognized recovery level {token:?}, using medium");
            Self::Medium
        })
    }

    /// Strict form of [`RecoveryLevel::from_token`]: `None` for unknown tokens.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "highest" => Some(Self::Highest),
            _ => None,
        }
    }

    /// The `qrcode` error-correction level backing this tier.
    pub fn ec_level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::High => EcLevel::Q,
            Self::Highest => EcLevel::H,
        }
    }
}
