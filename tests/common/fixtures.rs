//! Test fixtures and constants.

use tincture::Color;

/// Colors that exercise each HSV sector, greys and the channel extremes.
pub fn spread() -> Vec<Color> {
    vec![
        Color::new(0, 0, 0, 0),
        Color::new(255, 255, 255, 255),
        Color::new(128, 128, 128, 64),
        Color::new(255, 0, 0, 255),
        Color::new(255, 200, 0, 10),
        Color::new(60, 255, 0, 200),
        Color::new(0, 255, 180, 255),
        Color::new(0, 90, 255, 1),
        Color::new(140, 0, 255, 254),
        Color::new(255, 0, 90, 128),
        Color::new(92, 123, 34, 239),
        Color::new(10, 20, 30, 40),
    ]
}

/// Write a palette override file into a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn palette_file(yaml: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("palette.yaml");
    std::fs::write(&path, yaml).expect("write palette file");
    (dir, path)
}
