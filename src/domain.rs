/// Country-code second-level domains that act as part of the effective
/// top-level domain, e.g. `example.co.uk` is registered under `.co.uk`.
pub const COUNTRY_SECOND_LEVEL_DOMAINS: &[&str] = &[
    // Australia
    ".asn.au",
    ".com.au",
    ".net.au",
    ".id.au",
    ".org.au",
    ".edu.au",
    ".gov.au",
    ".csiro.au",
    ".act.au",
    ".nsw.au",
    ".nt.au",
    ".qld.au",
    ".sa.au",
    ".tas.au",
    ".vic.au",
    ".wa.au",
    // UK
    ".co.uk",
    ".org.uk",
    ".me.uk",
    ".ltd.uk",
    ".plc.uk",
    ".net.uk",
    ".sch.uk",
    ".ac.uk",
    ".gov.uk",
    ".mod.uk",
    ".mil.uk",
    ".nhs.uk",
    ".police.uk",
    // USA
    ".al.us",
    ".ak.us",
    ".az.us",
    ".ar.us",
    ".ca.us",
    ".co.us",
    ".ct.us",
    ".de.us",
    ".dc.us",
    ".fl.us",
    ".ga.us",
    ".hi.us",
    ".id.us",
    ".il.us",
    ".in.us",
    ".ia.us",
    ".ks.us",
    ".ky.us",
    ".la.us",
    ".me.us",
    ".md.us",
    ".ma.us",
    ".mi.us",
    ".mn.us",
    ".ms.us",
    ".mo.us",
    ".mt.us",
    ".ne.us",
    ".nv.us",
    ".nh.us",
    ".nj.us",
    ".nm.us",
    ".ny.us",
    ".nc.us",
    ".nd.us",
    ".oh.us",
    ".ok.us",
    ".or.us",
    ".pa.us",
    ".ri.us",
    ".sc.us",
    ".sd.us",
    ".tn.us",
    ".tx.us",
    ".ut.us",
    ".vt.us",
    ".va.us",
    ".wa.us",
    ".wv.us",
    ".wi.us",
    ".wy.us",
    ".as.us",
    ".gu.us",
    ".mp.us",
    ".pr.us",
    ".vi.us",
    ".fed.us",
    ".isa.us",
    ".nsn.us",
    ".dni.us",
    ".kids.us",
];

/// Check if `.<second>.<top>` is a known country-code second-level domain
fn is_country_second_level(second: &str, top: &str) -> bool {
    COUNTRY_SECOND_LEVEL_DOMAINS.iter().any(|entry| {
        entry
            .strip_prefix('.')
            .and_then(|entry| entry.split_once('.'))
            .is_some_and(|(sld, tld)| sld == second && tld == top)
    })
}

/// Best-effort guess at the labels in front of the registrable domain.
///
/// The last label is taken as the top-level domain and the one before it as
/// the second-level domain. When the second-level label is two characters
/// long or a known country-code SLD, it is folded into the suffix and one
/// more label is consumed. What remains is the sub domain:
///
/// - `www.example.com` gives `www`
/// - `www.foo.bar.example.co.uk` gives `www.foo.bar`
/// - `example.co.uk`, `example.com` and `localhost` give an empty string
///
/// Table entries are lower case and matched exactly, so an upper-case host
/// only folds a two-character second-level label: `WWW.EXAMPLE.GOV.UK` gives
/// `WWW.EXAMPLE`.
///
/// This is not public-suffix-list resolution.
pub fn sub_domain(host: &str) -> String {
    let mut labels: Vec<&str> = host.split('.').collect();
    let top = labels.pop().unwrap_or_default();

    if let Some(second) = labels.pop() {
        if second.len() == 2 || is_country_second_level(second, top) {
            labels.pop();
        }
    }

    labels.join(".")
}
