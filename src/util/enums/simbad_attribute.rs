use std::fmt::{self, Display, Formatter};

/// One item fetched from SIMBAD. Each attribute is a separate request.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum SimbadAttribute {
    Identity,
    RightAscension,
    Declination,
    MagB,
    MagV,
    MagR,
    MagI,
}

impl SimbadAttribute {
    /// Request order
    pub const SEQUENCE: [SimbadAttribute; 7] = [
        SimbadAttribute::Identity,
        SimbadAttribute::RightAscension,
        SimbadAttribute::Declination,
        SimbadAttribute::MagB,
        SimbadAttribute::MagV,
        SimbadAttribute::MagR,
        SimbadAttribute::MagI,
    ];

    /// Appended to `output.params=main_id,`
    pub fn url_fragment(&self) -> &'static str {
        match self {
            SimbadAttribute::Identity => "",
            SimbadAttribute::RightAscension => "ra(d;ICRS;2000.0;2000.0)",
            SimbadAttribute::Declination => "dec(d;ICRS;2000.0;2000.0)",
            SimbadAttribute::MagB => "flux(B)",
            SimbadAttribute::MagV => "flux(V)",
            SimbadAttribute::MagR => "flux(R)",
            SimbadAttribute::MagI => "flux(I)",
        }
    }
}

impl Display for SimbadAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimbadAttribute::Identity => "identifier",
            SimbadAttribute::RightAscension => "right ascension",
            SimbadAttribute::Declination => "declination",
            SimbadAttribute::MagB => "B magnitude",
            SimbadAttribute::MagV => "V magnitude",
            SimbadAttribute::MagR => "R magnitude",
            SimbadAttribute::MagI => "I magnitude",
        };
        f.write_str(name)
    }
}
