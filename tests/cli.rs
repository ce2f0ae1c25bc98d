use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

const SUCCESS_PREFIX: &str = "图片已成功生成: ";

fn host_has_font() -> bool {
    match text2png::load_font(&text2png::FontSpec::default()) {
        Ok(_) => true,
        Err(err) if std::env::var_os("CI").is_some() => panic!("{err}"),
        Err(err) => {
            eprintln!("skipping: {err}");
            false
        }
    }
}

fn text2png(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_text2png"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn text2png")
}

/// Runs the binary in a fresh directory and returns the directory and the decoded image.
fn render(args: &[&str]) -> (TempDir, RgbImage) {
    let dir = tempfile::tempdir().unwrap();
    let output = text2png(dir.path(), args);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let image = image::open(dir.path().join("output.png")).unwrap().to_rgb8();
    (dir, image)
}

#[test]
fn no_arguments_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = text2png(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("output.png").exists());
}

#[test]
fn single_glyph_writes_canvas_sized_png() {
    if !host_has_font() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let output = text2png(dir.path(), &["A"]);
    assert_eq!(output.status.code(), Some(0));

    let path = dir.path().join("output.png");
    assert_eq!(image::image_dimensions(&path).unwrap(), (800, 200));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    let line = lines.next().unwrap();
    assert!(lines.next().is_none(), "stdout: {stdout}");
    let reported = line.strip_prefix(SUCCESS_PREFIX).unwrap();
    assert!(Path::new(reported).is_absolute());
    assert!(reported.ends_with("output.png"));
}

#[test]
fn border_is_background_and_text_is_lit() {
    if !host_has_font() {
        return;
    }

    let (_dir, image) = render(&["hello", "world"]);

    for (x, y, pixel) in image.enumerate_pixels() {
        let border = x < 10 || y < 10 || x >= 790 || y >= 190;
        if border {
            assert_eq!(*pixel, Rgb([0, 0, 0]), "ink at ({x}, {y})");
        }
    }

    let lit = image.pixels().any(|p| {
        let [r, g, b] = p.0;
        0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b) > 200.0
    });
    assert!(lit);
}

#[test]
fn same_arguments_give_identical_files() {
    if !host_has_font() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    assert!(text2png(dir.path(), &["hello", "world"]).status.success());
    let first = std::fs::read(dir.path().join("output.png")).unwrap();
    assert!(text2png(dir.path(), &["hello", "world"]).status.success());
    let second = std::fs::read(dir.path().join("output.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn split_and_joined_arguments_match() {
    if !host_has_font() {
        return;
    }

    let (_split_dir, split) = render(&["hello", "world"]);
    let (_joined_dir, joined) = render(&["hello world"]);
    assert_eq!(split, joined);
}

#[test]
fn flag_like_arguments_are_rendered() {
    if !host_has_font() {
        return;
    }

    let (_dir, image) = render(&["--help"]);
    assert!(image.pixels().any(|p| p.0[0] > 200));
}

#[test]
fn double_dash_is_rendered_as_text() {
    if !host_has_font() {
        return;
    }

    let (_dir, image) = render(&["--"]);
    assert!(image.pixels().any(|p| p.0[0] > 200));

    let (_split_dir, split) = render(&["--", "foo"]);
    let (_joined_dir, joined) = render(&["-- foo"]);
    let (_plain_dir, plain) = render(&["foo"]);
    assert_eq!(split, joined);
    assert_ne!(split, plain);
}

#[cfg(target_os = "linux")]
#[test]
fn full_stdout_fails_without_panicking() {
    if !host_has_font() {
        return;
    }

    let Ok(full) = std::fs::OpenOptions::new().write(true).open("/dev/full") else {
        eprintln!("skipping: no /dev/full");
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_text2png"))
        .arg("hi")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdout(full)
        .output()
        .expect("failed to spawn text2png");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}

#[test]
fn long_sentence_is_not_an_error() {
    if !host_has_font() {
        return;
    }

    let (_dir, image) = render(&["The quick brown fox jumps over the lazy dog"]);
    assert_eq!(image.dimensions(), (800, 200));
}

#[test]
fn uncovered_code_points_still_succeed() {
    if !host_has_font() {
        return;
    }

    let (_dir, image) = render(&["你好"]);
    assert_eq!(image.dimensions(), (800, 200));
}

#[cfg(unix)]
#[test]
fn unwritable_directory_fails_with_io_error() {
    use std::os::unix::fs::PermissionsExt;

    if !host_has_font() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users write regardless of mode bits.
    let canary = dir.path().join("canary");
    if std::fs::write(&canary, b"").is_ok() {
        std::fs::remove_file(&canary).unwrap();
        eprintln!("skipping: directory stays writable for this user");
        return;
    }

    let output = text2png(dir.path(), &["hello"]);

    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error writing image"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}
