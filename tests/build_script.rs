// Mutates OUT_DIR, so it lives alone in its own test binary.

use std::env;

use icon_assets::{Error, IcoConverter};
use image::{Rgba, RgbaImage};

#[test]
fn cargo_output_goes_to_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("source.png");
    RgbaImage::from_pixel(32, 32, Rgba([0, 128, 255, 255]))
        .save(&source_path)
        .unwrap();

    env::remove_var("OUT_DIR");
    let err = IcoConverter::default()
        .convert_file_cargo(&source_path, "icon.ico")
        .unwrap_err();
    assert!(matches!(err, Error::MissingOutDir(_)));

    let out_dir = dir.path().join("out");
    env::set_var("OUT_DIR", &out_dir);
    let written = IcoConverter::default()
        .convert_file_cargo(&source_path, "icon.ico")
        .unwrap();
    env::remove_var("OUT_DIR");

    assert_eq!(written, out_dir.join("icon.ico"));
    assert!(written.is_file());
}
