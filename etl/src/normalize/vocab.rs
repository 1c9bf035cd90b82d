//! Controlled-vocabulary normalization: occupations, segments, sex codes.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::normalize::blank::is_blank_str;

/// Canonical occupation labels with the raw spellings folded into each.
///
/// Spellings come from years of front-desk free text, typos included.
const OCCUPATION_SYNONYMS: &[(&str, &[&str])] = &[
    ("KARYAWAN BUMD", &["KARYAWAN BUMD", "BUMD", "SLEMAN"]),
    ("KARYAWAN BUMN", &["KARYAWAN BUMN", "BUMN", "KARYWN BUMN", "KARY BUMN"]),
    ("HONORER", &["HONORER", "KARYAWAN HONORER"]),
    (
        "IBU RUMAH TANGGA",
        &[
            "IBU RUMAH TANGGA",
            "IRT",
            "MENGURUS RUMAH TANGGA",
            "MRT",
            "RUMAH TANGGA",
        ],
    ),
    ("PEDAGANG", &["PEDAGANG", "PERDAGANGAN"]),
    (
        "PEGAWAI NEGERI SIPIL",
        &[
            "PEG NEGERI",
            "PEGAWAI NEGERI",
            "PEGAWAI NEGERI SIPIL",
            "PEGAWAI NEGRI",
            "PEGAWAI NEGRI SIPIL",
            "PNS",
        ],
    ),
    (
        "KARYAWAN SWASTA",
        &[
            "KAR SWASTA",
            "KARYAWAN SWASTA",
            "KARY SWASTA",
            "KARYAWAB SWASTA",
            "KARYAWAN SWATA",
            "KARYWAN SWASTA",
            "PEG. SWASTA",
            "PEGAWAI SWASTA",
            "KARYAWAN",
            "KARYAWATI",
            "SWASTA",
        ],
    ),
    (
        "TIDAK BEKERJA",
        &[
            "BELM BEKERJA",
            "BELUM BEKERJA",
            "BELUM TIDAK BEKERJA",
            "BELUM/TIDAK BEKERJA",
            "TDK BEKERJA",
            "TIDAK BEKERJA",
        ],
    ),
    ("WIRASWASTA", &["WIRASWASTA", "WIRASWATA"]),
    (
        "PELAJAR MAHASISWA",
        &[
            "PELAJAR",
            "MAHASISWA",
            "SISWA",
            "PELAJAR MAHASISWA",
            "MAHASISWI",
            "PELAJAR / MAHASISWA",
            "PELAJAR/ MAHASISWA",
            "PELAJAR/MAHASISWA",
            "PELAJAR/MAHASIWA",
            "PELAJAR/MHS",
            "PELAJAR/NAHASISWA",
        ],
    ),
    ("DOSEN", &["DOSEN"]),
];

static OCCUPATION_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (canonical, spellings) in OCCUPATION_SYNONYMS {
        for spelling in *spellings {
            map.insert(*spelling, *canonical);
        }
    }
    map
});

/// Folds an occupation spelling into its canonical label.
///
/// Matching is on the trimmed upper-cased value; unmatched occupations pass
/// through trimmed and upper-cased, blanks become `None`.
pub fn clean_occupation(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let upper = value.trim().to_uppercase();
    match OCCUPATION_MAP.get(upper.as_str()) {
        Some(canonical) => Some((*canonical).to_string()),
        None => Some(upper),
    }
}

/// Normalizes a market segment code. `COMPL` folds into `COMP`.
pub fn clean_segment(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let upper = value.trim().to_uppercase();
    if upper == "COMPL" {
        Some("COMP".to_string())
    } else {
        Some(upper)
    }
}

/// Normalizes a sex code to `M`, `F`, or `UNIDENTIFIED`.
pub fn clean_sex(value: &str) -> Option<String> {
    if is_blank_str(value) {
        return None;
    }
    let code = match value.trim().to_uppercase().as_str() {
        "M" | "MALE" => "M",
        "F" | "FEMALE" => "F",
        _ => "UNIDENTIFIED",
    };
    Some(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupation_synonyms_fold_to_canonical() {
        assert_eq!(clean_occupation("irt"), Some("IBU RUMAH TANGGA".to_string()));
        assert_eq!(clean_occupation(" PNS "), Some("PEGAWAI NEGERI SIPIL".to_string()));
        assert_eq!(clean_occupation("pelajar/mhs"), Some("PELAJAR MAHASISWA".to_string()));
        assert_eq!(clean_occupation("Karyawan Swata"), Some("KARYAWAN SWASTA".to_string()));
    }

    #[test]
    fn unmatched_occupations_pass_through_uppercased() {
        assert_eq!(clean_occupation("astronaut"), Some("ASTRONAUT".to_string()));
    }

    #[test]
    fn blank_occupations_are_none() {
        assert_eq!(clean_occupation("null"), None);
        assert_eq!(clean_occupation("  "), None);
    }

    #[test]
    fn segment_compl_folds_into_comp() {
        assert_eq!(clean_segment("compl"), Some("COMP".to_string()));
        assert_eq!(clean_segment("COMP"), Some("COMP".to_string()));
        assert_eq!(clean_segment("FIT"), Some("FIT".to_string()));
        assert_eq!(clean_segment("nan"), None);
    }

    #[test]
    fn sex_codes_normalize() {
        assert_eq!(clean_sex("m"), Some("M".to_string()));
        assert_eq!(clean_sex("FEMALE"), Some("F".to_string()));
        assert_eq!(clean_sex("x"), Some("UNIDENTIFIED".to_string()));
        assert_eq!(clean_sex(""), None);
    }
}
