use super::*;

#[test]
fn run() {
    let r = rigid();
    let got = r.run();
    assert_eq!(got.input, r);
    assert_eq!(got.qrot, r.qrot());
    assert_eq!(got.transitions, r.transitions());
    assert_eq!(got.spectrum.len(), consts::NPUNTOS + 1);
}

#[test]
fn display() {
    let got = rigid().run().to_string();
    assert!(got.starts_with("Rotation-vibration spectrum of rigid rotor\n"));
    assert!(got.contains(&rigid().annotation()));
    assert!(got.contains("Jmax = 1\n"));
    assert!(got.contains("T = 10 K\n"));
    assert!(got.contains("qRot = 3.24983060\n"));
    assert!(got.contains("Spectrum: 10001 points"));
    assert!(got.contains("Peak intensity"));

    // header plus one row per transition
    let table: Vec<_> = got
        .lines()
        .skip_while(|l| !l.starts_with("Transitions"))
        .skip(2)
        .take_while(|l| !l.is_empty())
        .collect();
    let want = vec![
        "     P    1       98.0000    0.692292",
        "     Q    0      100.0000    0.000000",
        "     R    0      102.0000    0.307708",
        "     R    1      104.0000    0.692292",
    ];
    assert_eq!(table, want);
}

#[test]
fn json() {
    let got = serde_json::to_value(hcl().run()).unwrap();
    assert_eq!(got["input"]["label"], "HCl");
    assert_eq!(got["input"]["jmax"], 20);
    assert_eq!(got["transitions"].as_array().unwrap().len(), 42);
    assert_eq!(got["transitions"][20]["branch"], "Q");
    assert_eq!(
        got["spectrum"]["freqs"].as_array().unwrap().len(),
        consts::NPUNTOS + 1
    );
}
