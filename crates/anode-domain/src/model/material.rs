//! Material families, source codes and the composite blend key

use serde::{Deserialize, Serialize};

/// One of the four anode raw-material families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialFamily {
    /// Calcined petroleum coke, high sulfur
    CpcHs,
    /// Calcined petroleum coke, low sulfur
    CpcLs,
    /// Coal tar pitch
    Ctp,
    /// Recycled anode butts
    Butt,
}

impl MaterialFamily {
    /// Families that are bought from a selectable source
    pub const SOURCED: [MaterialFamily; 3] =
        [MaterialFamily::CpcHs, MaterialFamily::CpcLs, MaterialFamily::Ctp];

    /// Label used in the `Jenis` column of candidate tables
    pub fn label(&self) -> &'static str {
        match self {
            MaterialFamily::CpcHs => "CPC-HS",
            MaterialFamily::CpcLs => "CPC-LS",
            MaterialFamily::Ctp => "CTP",
            MaterialFamily::Butt => "BUTT",
        }
    }

    /// Parse a `Jenis` value. Only sourced families are accepted.
    ///
    /// Separators are tolerated, so `CPC-HS`, `CPC_HS` and `cpc hs` all map to
    /// [`MaterialFamily::CpcHs`].
    pub fn from_jenis(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "CPCHS" => Some(MaterialFamily::CpcHs),
            "CPCLS" => Some(MaterialFamily::CpcLs),
            "CTP" => Some(MaterialFamily::Ctp),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Supplier/origin code of a sourced material: a single letter (the `Lot`
/// column of candidate tables)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceCode(char);

impl SourceCode {
    /// Parse a source code from raw text.
    ///
    /// Yields `None` unless the trimmed text is exactly one ASCII letter, so
    /// concatenated blend keys stay unambiguous.
    pub fn new(raw: &str) -> Option<Self> {
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(Self(c)),
            _ => None,
        }
    }

    /// Code for a known catalog letter
    pub const fn from_letter(letter: char) -> Self {
        Self(letter)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for SourceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite key of a three-way sourcing choice.
///
/// The canonical order is HS, LS, CTP. The reference table stores the key as
/// the concatenation of the three codes in that order (e.g. `"AGA"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlendKey {
    pub hs: SourceCode,
    pub ls: SourceCode,
    pub ctp: SourceCode,
}

impl BlendKey {
    pub fn new(hs: SourceCode, ls: SourceCode, ctp: SourceCode) -> Self {
        Self { hs, ls, ctp }
    }

    /// Parse three raw codes, failing on any that is not a single letter
    pub fn from_codes(hs: &str, ls: &str, ctp: &str) -> Option<Self> {
        Some(Self::new(
            SourceCode::new(hs)?,
            SourceCode::new(ls)?,
            SourceCode::new(ctp)?,
        ))
    }

    /// Key as stored in the reference table's `Lot` column
    pub fn lot(&self) -> String {
        format!("{}{}{}", self.hs, self.ls, self.ctp)
    }
}

impl std::fmt::Display for BlendKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.hs, self.ls, self.ctp)
    }
}
