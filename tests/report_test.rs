//! Example-runner pieces: named colors, reports, swatches and config

use rgb_hsi::swatch::swatch_path;
use rgb_hsi::{run_round_trips, AppConfig, Config, NamedColor, Rgb, Swatch};
use std::fs;

#[test]
fn test_configured_examples_print_like_the_demo() {
    let reports = run_round_trips(&AppConfig::default().examples).unwrap();
    let printed: String = reports.iter().map(|r| format!("{}\n", r)).collect();

    assert!(printed.starts_with("--- Red ---\nOriginal RGB: (255, 0, 0)\n"));
    assert!(printed.contains("--- Cyan ---\nOriginal RGB: (0, 255, 255)\nConverted to HSI: H=180.00°, S=1.00, I=0.67\n"));
    assert!(printed.contains("Converted to HSI: H=0.00°, S=0.00, I=0.50\nConverted back to RGB: (128, 128, 128)\n\n"));
    assert!(printed.contains("--- Complex ---\nOriginal RGB: (150, 75, 200)\nConverted to HSI: H=276.59°, S=0.47, I=0.56\n"));
}

#[test]
fn test_command_line_colors_in_every_notation() {
    let colors = vec![
        NamedColor::new("hex", "#3366CC"),
        NamedColor::new("bare", "3366cc"),
        NamedColor::new("triple", "51,102,204"),
    ];
    let reports = run_round_trips(&colors).unwrap();
    assert!(reports.iter().all(|r| r.original == Rgb::new(51, 102, 204)));
    assert!(reports.iter().all(|r| r.max_error() <= 1));
}

#[test]
fn test_config_and_swatches_in_scratch_dir() {
    let dir = std::env::temp_dir().join(format!("rgb_hsi_report_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let config = Config::at(&dir).unwrap();
    assert!(config.init_default().unwrap());
    let app = config.load().unwrap();
    assert_eq!(app, AppConfig::default());

    let swatch_dir = dir.join("swatches");
    for report in run_round_trips(&app.examples).unwrap() {
        Swatch::solid(report.restored, app.visualizer.swatch_size)
            .save(&swatch_path(&swatch_dir, &report.name))
            .unwrap();
    }
    assert!(swatch_dir.join("mid_gray.png").exists());
    assert_eq!(fs::read_dir(&swatch_dir).unwrap().count(), 4);

    let _ = fs::remove_dir_all(dir);
}
