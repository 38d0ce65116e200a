use std::io::Cursor;

use crate::load::read;

use super::*;

#[test]
fn load() {
    let got = Rovib::load("testfiles/rigid.in").unwrap();
    assert_eq!(got, rigid());

    let got = Rovib::load("testfiles/hcl.in").unwrap();
    assert_eq!(got, hcl());
}

#[test]
fn load_json() {
    let got = Rovib::load_json("testfiles/hcl.json").unwrap();
    assert_eq!(got, hcl());
    assert_eq!(got, Rovib::load("testfiles/hcl.in").unwrap());
}

#[test]
fn load_temp() {
    let got = Rovib::load("testfiles/co_temp.in").unwrap();
    let want =
        Rovib::new("CO", 1.93128, 6.12e-6, 2169.81358, 0.006124, 0.01750, 30)
            .with_temp(300.0);
    assert_eq!(got, want);
}

#[test]
fn missing_jmax() {
    let got = Rovib::load("testfiles/no_jmax.in");
    assert!(matches!(got, Err(LoadError::MissingSection("JMAX"))));
}

#[test]
fn missing_constants() {
    let input = "# MOLECULE ###\nHCl\n# JMAX ###\n3\n";
    let got = read(Cursor::new(input));
    assert!(matches!(got, Err(LoadError::MissingSection("CONSTANTS"))));

    let input = "# CONSTANTS ###\n1 2 3 4 5\n# JMAX ###\n3\n";
    let got = read(Cursor::new(input));
    assert!(matches!(got, Err(LoadError::MissingSection("MOLECULE"))));
}

#[test]
fn jmax_zero() {
    let got = Rovib::load("testfiles/jmax0.in");
    assert!(matches!(got, Err(LoadError::JMax(0))));

    let got = Rovib::load_json("testfiles/jmax0.json");
    assert!(matches!(got, Err(LoadError::JMax(0))));
}

#[test]
fn constant_count() {
    let got = Rovib::load("testfiles/four_constants.in");
    assert!(matches!(got, Err(LoadError::ConstantCount { found: 4 })));
}

#[test]
fn bad_constant() {
    let got = Rovib::load("testfiles/bad_constant.in");
    match &got {
        Err(LoadError::Parse { section, value }) => {
            assert_eq!(*section, "CONSTANTS");
            assert_eq!(value.as_str(), "abc");
        }
        _ => panic!("expected parse error, got {got:?}"),
    }
}

#[test]
fn missing_file() {
    let got = Rovib::load("testfiles/does_not_exist.in");
    assert!(matches!(got, Err(LoadError::Io(_))));
}

#[test]
fn validate() {
    assert!(rigid().validate().is_ok());
    assert!(hcl().with_temp(77.0).validate().is_ok());

    let got = Rovib { b: f64::NAN, ..rigid() }.validate();
    assert!(matches!(got, Err(LoadError::NonFinite { name: "B", .. })));

    let got = Rovib {
        alfae: f64::INFINITY,
        ..rigid()
    }
    .validate();
    assert!(matches!(got, Err(LoadError::NonFinite { name: "alfae", .. })));

    let got = rigid().with_temp(0.0).validate();
    assert!(matches!(got, Err(LoadError::Temp(_))));

    let got = rigid().with_temp(-5.0).validate();
    assert!(matches!(got, Err(LoadError::Temp(_))));
}

#[test]
fn error_messages() {
    assert_eq!(
        LoadError::JMax(0).to_string(),
        "jmax must be at least 1, got 0"
    );
    assert_eq!(
        LoadError::ConstantCount { found: 3 }.to_string(),
        "wrong number of constants. found 3 expected 5"
    );
    assert_eq!(
        LoadError::MissingSection("JMAX").to_string(),
        "missing JMAX section"
    );
}

#[test]
fn negative_frot() {
    // B/D is about 19915, so F(J) turns over between J = 140 and 141
    let r = Rovib { jmax: 150, ..hcl() };
    let got = r.validate();
    match got {
        Err(LoadError::NegativeFrot { j, frot }) => {
            assert_eq!(j, 141);
            assert!(frot < 0.0);
        }
        _ => panic!("expected negative rotational term, got {got:?}"),
    }

    let r = Rovib { jmax: 140, ..hcl() };
    assert!(r.validate().is_ok());
    assert!(r.qrot().is_finite());
    assert!(r.run().spectrum.intensities.iter().all(|i| i.is_finite()));
}

#[test]
fn label_with_keyword() {
    let input = "# MOLECULE ###\nTEMPO\n# CONSTANTS ###
10.59341 5.3194e-4 2990.9463 0.01741 0.307181\n# JMAX ###\n20\n";
    let got = read(Cursor::new(input)).unwrap();
    let want = Rovib {
        label: "TEMPO".to_owned(),
        ..hcl()
    };
    assert_eq!(got, want);
}
