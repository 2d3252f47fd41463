pub const SIMBAD_URL: &str = "http://simbad.u-strasbg.fr/simbad/sim-id";
pub const VSP_URL: &str = "https://app.aavso.org/vsp/api/chart/";
pub const SKYVIEW_URL: &str = "https://skyview.gsfc.nasa.gov/cgi-bin/images";

/// Courtesy delay between successive SIMBAD requests
pub const DEFAULT_REQUEST_INTERVAL_MILLIS: u64 = 250;
pub const DEFAULT_TIMEOUT_MILLIS: u64 = 30_000;

/// Magnitude written for the target row, which carries no catalog photometry
pub const TARGET_MAGNITUDE: f64 = 99.999;

/// Width and height of downloaded DSS images
pub const DSS_PIXELS: u32 = 1000;

pub const RADEC_SUFFIX: &str = "radec.txt";
pub const FITS_SUFFIX: &str = "fits";
