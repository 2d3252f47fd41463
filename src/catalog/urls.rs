use crate::query::Query;
use crate::util::*;

pub fn simbad_url(base: &str, object_id: &str, attribute: SimbadAttribute) -> String {
    format!(
        "{}?output.format=votable&Ident={}&output.params=main_id,{}",
        base,
        urlencoding::encode(object_id),
        attribute.url_fragment()
    )
}

pub fn vsp_url(base: &str, query: &Query) -> String {
    format!(
        "{}?format=json&fov={:.1}&maglimit={:.1}&ra={:.5}&dec={:.5}",
        base,
        query.fov_amin,
        query.mag_limit,
        query.ra_deg(),
        query.dec_deg
    )
}

pub fn skyview_url(base: &str, query: &Query) -> String {
    format!(
        "{}?Survey=digitized+sky+survey&position={:.5},{:.5}&Size={:?}&Pixels={}&Return=FITS",
        base,
        query.ra_deg(),
        query.dec_deg,
        query.fov_deg(),
        DSS_PIXELS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simbad_url() {
        assert_eq!(
            simbad_url(SIMBAD_URL, "vega", SimbadAttribute::Identity),
            "http://simbad.u-strasbg.fr/simbad/sim-id?output.format=votable&Ident=vega&output.params=main_id,"
        );
        assert_eq!(
            simbad_url(SIMBAD_URL, "wasp 12", SimbadAttribute::RightAscension),
            "http://simbad.u-strasbg.fr/simbad/sim-id?output.format=votable&Ident=wasp%2012&output.params=main_id,ra(d;ICRS;2000.0;2000.0)"
        );
        assert!(simbad_url(SIMBAD_URL, "vega", SimbadAttribute::MagI).ends_with("main_id,flux(I)"));
    }

    #[test]
    fn test_vsp_url() {
        assert_eq!(
            vsp_url(VSP_URL, &Query::default()),
            "https://app.aavso.org/vsp/api/chart/?format=json&fov=60.0&maglimit=15.0&ra=97.63665&dec=29.67230"
        );
    }

    #[test]
    fn test_skyview_url() {
        assert_eq!(
            skyview_url(SKYVIEW_URL, &Query::default()),
            "https://skyview.gsfc.nasa.gov/cgi-bin/images?Survey=digitized+sky+survey&position=97.63665,29.67230&Size=1.0&Pixels=1000&Return=FITS"
        );
    }
}
