//! Known source codes per sourced family

use anode_domain::model::{BlendKey, MaterialFamily, SourceCode};

pub const CPC_HS_SOURCES: &[SourceCode] = &[
    SourceCode::from_letter('A'),
    SourceCode::from_letter('F'),
    SourceCode::from_letter('M'),
    SourceCode::from_letter('W'),
];
pub const CPC_LS_SOURCES: &[SourceCode] = &[
    SourceCode::from_letter('G'),
    SourceCode::from_letter('J'),
    SourceCode::from_letter('S'),
];
pub const CTP_SOURCES: &[SourceCode] = &[
    SourceCode::from_letter('A'),
    SourceCode::from_letter('E'),
    SourceCode::from_letter('H'),
    SourceCode::from_letter('Q'),
];

/// Codes offered for a family; butt has none
pub fn sources_for(family: MaterialFamily) -> &'static [SourceCode] {
    match family {
        MaterialFamily::CpcHs => CPC_HS_SOURCES,
        MaterialFamily::CpcLs => CPC_LS_SOURCES,
        MaterialFamily::Ctp => CTP_SOURCES,
        MaterialFamily::Butt => &[],
    }
}

pub fn is_known_source(family: MaterialFamily, code: &SourceCode) -> bool {
    sources_for(family).contains(code)
}

/// Preselected sourcing of the single-prediction form (W, G, A)
pub fn default_selection() -> BlendKey {
    BlendKey::new(CPC_HS_SOURCES[3], CPC_LS_SOURCES[0], CTP_SOURCES[0])
}
