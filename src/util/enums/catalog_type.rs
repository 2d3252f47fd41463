use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CatalogType {
    Simbad,
    Vsp,
    Apass,
    /// Digitized Sky Survey images, no photometry
    Dss,
}

impl CatalogType {
    /// Magnitude bands the catalog reports
    pub fn mag_bands(&self) -> &'static [&'static str] {
        match self {
            CatalogType::Simbad => &["B", "V", "R", "I"],
            CatalogType::Vsp => &["B", "V", "Rc", "Ic"],
            CatalogType::Apass => &["B", "V", "SR", "SG"],
            CatalogType::Dss => &[],
        }
    }

    pub fn supports_band(&self, band: &str) -> bool {
        self.mag_bands()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(band))
    }
}

impl Display for CatalogType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogType::Simbad => "SIMBAD",
            CatalogType::Vsp => "VSP",
            CatalogType::Apass => "APASS",
            CatalogType::Dss => "DSS",
        };
        f.write_str(name)
    }
}

impl FromStr for CatalogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SIMBAD" => Ok(CatalogType::Simbad),
            "VSP" => Ok(CatalogType::Vsp),
            "APASS" => Ok(CatalogType::Apass),
            "DSS" => Ok(CatalogType::Dss),
            _ => Err(format!("Unknown catalog: \"{}\"", s)),
        }
    }
}
