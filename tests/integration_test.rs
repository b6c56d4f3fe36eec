use placeholder_icons::{
    icon_gen::{generate_icons, Args, DEFAULT_COLOR},
    verify::verify_icons,
};
use image::Rgba;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const FILES: [(&str, u32); 4] = [
    ("icon.png", 512),
    ("32x32.png", 32),
    ("128x128.png", 128),
    ("icon.ico", 256),
];

/// Runs `placeholder-icons` with no arguments in an empty directory and
/// asserts that the four icons land in `src-tauri/icons`.
#[test]
fn test_binary_without_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(env!("CARGO_BIN_EXE_placeholder-icons"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run placeholder-icons");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("placeholder-icons failed with status: {}", output.status);
    }

    let icons_dir = temp_dir.path().join("src-tauri").join("icons");
    assert_icon_set(&icons_dir, DEFAULT_COLOR);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated icon.ico"));
}

#[test]
fn test_generate_into_custom_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("nested").join("icons");

    generate_icons(Args {
        output: output_dir.clone(),
        color: Some("rgb(10, 20, 30)".to_string()),
    })
    .expect("Icon generation failed");

    assert_icon_set(&output_dir, Rgba([10, 20, 30, 255]));
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");
    let args = || Args {
        output: output_dir.clone(),
        color: None,
    };

    generate_icons(args()).expect("First run failed");
    let first: Vec<Vec<u8>> = read_all(&output_dir);

    generate_icons(args()).expect("Second run failed");
    let second: Vec<Vec<u8>> = read_all(&output_dir);

    assert_eq!(first, second);
}

#[test]
fn test_ico_wraps_256_png() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");
    generate_icons(Args {
        output: output_dir.clone(),
        color: None,
    })
    .unwrap();

    let ico = std::fs::read(output_dir.join("icon.ico")).unwrap();
    let size = u32::from_le_bytes(ico[14..18].try_into().unwrap()) as usize;
    assert_eq!(ico.len(), 22 + size);

    let embedded = image::load_from_memory(&ico[22..]).expect("Embedded PNG should decode");
    assert_eq!((embedded.width(), embedded.height()), (256, 256));
}

#[test]
fn test_invalid_color_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");

    let result = generate_icons(Args {
        output: output_dir.clone(),
        color: Some("definitely not a color".to_string()),
    });

    assert!(result.is_err());
    assert!(!output_dir.join("icon.png").exists());
}

#[test]
fn test_output_path_is_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("icons");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = generate_icons(Args {
        output: blocker,
        color: None,
    });

    assert!(result.is_err());
}

#[test]
fn test_verify_rejects_wrong_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");
    generate_icons(Args {
        output: output_dir.clone(),
        color: None,
    })
    .unwrap();

    let wrong = placeholder_icons::png::build_png(64, 64, DEFAULT_COLOR).unwrap();
    std::fs::write(output_dir.join("32x32.png"), wrong).unwrap();

    let err = verify_icons(&output_dir, DEFAULT_COLOR).unwrap_err();
    assert!(err.to_string().contains("32x32.png"));
}

#[test]
fn test_verify_rejects_wrong_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");
    generate_icons(Args {
        output: output_dir.clone(),
        color: None,
    })
    .unwrap();

    assert!(verify_icons(&output_dir, Rgba([0, 0, 0, 255])).is_err());
}

#[test]
fn test_verify_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    assert!(verify_icons(&temp_dir.path().join("missing"), DEFAULT_COLOR).is_err());
}

fn assert_icon_set(dir: &Path, color: Rgba<u8>) {
    for (name, size) in FILES {
        let path = dir.join(name);
        assert!(path.exists(), "{} should exist", path.display());

        let img = image::open(&path).expect("Failed to decode generated icon");
        assert_eq!((img.width(), img.height()), (size, size), "{}", name);
    }

    let reports = verify_icons(dir, color).expect("Icon set should verify");
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.color == color));
}

fn read_all(dir: &Path) -> Vec<Vec<u8>> {
    FILES
        .iter()
        .map(|(name, _)| std::fs::read(dir.join(name)).expect("Failed to read icon"))
        .collect()
}
