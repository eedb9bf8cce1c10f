//! The tracked instrument universe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Broad asset class of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Government bonds.
    Bond,
    /// Equities (broad market, sector or country funds).
    Equity,
    /// Commodities (metals, energy, agriculture).
    Commodity,
}

impl AssetClass {
    /// Returns the asset class as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bond => "bond",
            Self::Equity => "equity",
            Self::Commodity => "commodity",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An exchange-traded fund from the fixed universe ventana tracks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instrument {
    /// iShares U.S. Treasury Bond ETF.
    Govt,
    /// Health Care Select Sector SPDR Fund.
    Xlv,
    /// SPDR Gold Shares.
    Gld,
    /// iShares MSCI China ETF.
    Mchi,
    /// iShares Core S&P 500 ETF.
    Ivv,
}

impl Instrument {
    /// Returns the exchange ticker symbol.
    #[must_use]
    pub const fn ticker(&self) -> &'static str {
        match self {
            Self::Govt => "GOVT",
            Self::Xlv => "XLV",
            Self::Gld => "GLD",
            Self::Mchi => "MCHI",
            Self::Ivv => "IVV",
        }
    }

    /// Returns the fund name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Govt => "iShares U.S. Treasury Bond ETF",
            Self::Xlv => "Health Care Select Sector SPDR Fund",
            Self::Gld => "SPDR Gold Shares",
            Self::Mchi => "iShares MSCI China ETF",
            Self::Ivv => "iShares Core S&P 500 ETF",
        }
    }

    /// Returns a short description of what the fund holds.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Govt => "U.S. Treasury bonds across the maturity curve",
            Self::Xlv => "U.S. large-cap health care equities",
            Self::Gld => "Physical gold bullion",
            Self::Mchi => "Large and mid-cap Chinese equities",
            Self::Ivv => "U.S. large-cap equities tracking the S&P 500",
        }
    }

    /// Returns the asset class.
    #[must_use]
    pub const fn asset_class(&self) -> AssetClass {
        match self {
            Self::Govt => AssetClass::Bond,
            Self::Gld => AssetClass::Commodity,
            Self::Xlv | Self::Mchi | Self::Ivv => AssetClass::Equity,
        }
    }

    /// Returns the full universe in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Govt, Self::Xlv, Self::Gld, Self::Mchi, Self::Ivv]
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ticker())
    }
}

impl FromStr for Instrument {
    type Err = InstrumentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOVT" => Ok(Self::Govt),
            "XLV" => Ok(Self::Xlv),
            "GLD" => Ok(Self::Gld),
            "MCHI" => Ok(Self::Mchi),
            "IVV" => Ok(Self::Ivv),
            _ => Err(InstrumentParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing a ticker outside the instrument universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentParseError(String);

impl std::fmt::Display for InstrumentParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown instrument '{}', expected one of: GOVT, XLV, GLD, MCHI, IVV",
            self.0
        )
    }
}

impl std::error::Error for InstrumentParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("GOVT".parse::<Instrument>().unwrap(), Instrument::Govt);
        assert_eq!("mchi".parse::<Instrument>().unwrap(), Instrument::Mchi);
        assert_eq!(" Ivv ".parse::<Instrument>().unwrap(), Instrument::Ivv);
        assert!("SPY".parse::<Instrument>().is_err());
    }

    #[test]
    fn test_ticker_round_trips_through_display() {
        for instrument in Instrument::all() {
            let parsed: Instrument = instrument.to_string().parse().unwrap();
            assert_eq!(parsed, *instrument);
        }
    }

    #[test]
    fn test_asset_class() {
        assert_eq!(Instrument::Govt.asset_class(), AssetClass::Bond);
        assert_eq!(Instrument::Gld.asset_class(), AssetClass::Commodity);
        assert_eq!(Instrument::Xlv.asset_class(), AssetClass::Equity);
    }

    #[test]
    fn test_serde_uses_ticker() {
        let json = serde_json::to_string(&Instrument::Xlv).unwrap();
        assert_eq!(json, "\"XLV\"");
        let back: Instrument = serde_json::from_str("\"GLD\"").unwrap();
        assert_eq!(back, Instrument::Gld);
    }
}
