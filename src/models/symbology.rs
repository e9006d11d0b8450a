use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Barcode symbology reported by the decode engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// Aztec 2D code
    Aztec,
    /// Codabar linear code
    Codabar,
    /// Code 39
    Code39,
    /// Code 93
    Code93,
    /// Code 128
    Code128,
    /// Data Matrix 2D code
    DataMatrix,
    /// EAN-8
    Ean8,
    /// EAN-13
    Ean13,
    /// Interleaved 2 of 5 (ITF-14)
    Itf,
    /// MaxiCode
    MaxiCode,
    /// PDF417 stacked code
    Pdf417,
    /// QR Code
    QrCode,
    /// GS1 DataBar (RSS-14)
    Rss14,
    /// GS1 DataBar Expanded
    RssExpanded,
    /// UPC-A
    UpcA,
    /// UPC-E
    UpcE,
    /// UPC/EAN 2- or 5-digit extension
    UpcEanExtension,
    /// GS1 formatted payload
    AssumeGs1,
}

impl Symbology {
    /// Every known symbology, in table order
    pub const ALL: [Symbology; 18] = [
        Symbology::Aztec,
        Symbology::Codabar,
        Symbology::Code39,
        Symbology::Code93,
        Symbology::Code128,
        Symbology::DataMatrix,
        Symbology::Ean8,
        Symbology::Ean13,
        Symbology::Itf,
        Symbology::MaxiCode,
        Symbology::Pdf417,
        Symbology::QrCode,
        Symbology::Rss14,
        Symbology::RssExpanded,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::UpcEanExtension,
        Symbology::AssumeGs1,
    ];

    /// Engine token (e.g. `QR_CODE`)
    pub fn token(&self) -> &'static str {
        match self {
            Symbology::Aztec => "AZTEC",
            Symbology::Codabar => "CODABAR",
            Symbology::Code39 => "CODE_39",
            Symbology::Code93 => "CODE_93",
            Symbology::Code128 => "CODE_128",
            Symbology::DataMatrix => "DATA_MATRIX",
            Symbology::Ean8 => "EAN_8",
            Symbology::Ean13 => "EAN_13",
            Symbology::Itf => "ITF",
            Symbology::MaxiCode => "MAXICODE",
            Symbology::Pdf417 => "PDF_417",
            Symbology::QrCode => "QR_CODE",
            Symbology::Rss14 => "RSS_14",
            Symbology::RssExpanded => "RSS_EXPANDED",
            Symbology::UpcA => "UPC_A",
            Symbology::UpcE => "UPC_E",
            Symbology::UpcEanExtension => "UPC_EAN_EXTENSION",
            Symbology::AssumeGs1 => "ASSUME_GS1",
        }
    }

    /// Human-readable label (e.g. `QR Code`)
    pub fn label(&self) -> &'static str {
        match self {
            Symbology::Aztec => "Aztec",
            Symbology::Codabar => "Codabar",
            Symbology::Code39 => "Code 39",
            Symbology::Code93 => "Code 93",
            Symbology::Code128 => "Code 128",
            Symbology::DataMatrix => "Data Matrix",
            Symbology::Ean8 => "EAN-8",
            Symbology::Ean13 => "EAN-13",
            Symbology::Itf => "ITF-14",
            Symbology::MaxiCode => "MaxiCode",
            Symbology::Pdf417 => "PDF417",
            Symbology::QrCode => "QR Code",
            Symbology::Rss14 => "RSS-14",
            Symbology::RssExpanded => "RSS",
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::UpcEanExtension => "EAN",
            Symbology::AssumeGs1 => "GS1",
        }
    }

    /// Look up a token. Exact, case-sensitive match only.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token() == token)
    }

    /// Whether this is a two-dimensional (matrix or stacked) code
    pub fn is_2d(&self) -> bool {
        matches!(
            self,
            Symbology::Aztec
                | Symbology::DataMatrix
                | Symbology::MaxiCode
                | Symbology::Pdf417
                | Symbology::QrCode
        )
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| Error::UnknownSymbology(s.to_string()))
    }
}

/// Label for a raw symbology token, or `""` when the token is unknown
pub fn symbology_label(token: &str) -> &'static str {
    match Symbology::from_token(token) {
        Some(symbology) => symbology.label(),
        None => {
            tracing::debug!(token, "unknown symbology token");
            ""
        }
    }
}
