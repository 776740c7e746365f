use clap::Parser;
use std::path::{Path, PathBuf};
use svgpick::engine::{
    Cli, has_svg_extension, path_relative_to, select_best_svg, setup_opts, svg_stem,
};
use svgpick::extractor::{Step, planned_steps};
use log::Level;
use svgpick::utils::WorkerThreadLimits;
use svgpick::utils::logger::{crate_level, format_line};
use svgpick::utils::svgpick_toml::{apply_file_to_opts, parse_svgpick_toml};
use svgpick::{Job, JobError, Opts, Outcome, Tally};

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

fn pick<'a>(candidates: &'a [PathBuf], tech: &str) -> Option<&'a str> {
    select_best_svg(candidates, tech).and_then(|p| p.to_str())
}

// --- select_best_svg ---

#[test]
fn test_select_prefers_original() {
    let c = paths(&["foo-line.svg", "foo-original.svg", "foo-plain.svg"]);
    assert_eq!(pick(&c, "foo"), Some("foo-original.svg"));
}

#[test]
fn test_select_original_beats_exact_stem() {
    let c = paths(&["go.svg", "go-plain.svg", "go-original-wordmark.svg"]);
    assert_eq!(pick(&c, "go"), Some("go-original-wordmark.svg"));
}

#[test]
fn test_select_original_case_insensitive() {
    let c = paths(&["rust-plain.svg", "Rust-ORIGINAL.svg"]);
    assert_eq!(pick(&c, "rust"), Some("Rust-ORIGINAL.svg"));
}

#[test]
fn test_select_first_original_in_order_wins() {
    let c = paths(&["a/x-original.svg", "b/x-original-wordmark.svg"]);
    assert_eq!(pick(&c, "x"), Some("a/x-original.svg"));
}

#[test]
fn test_select_single_file() {
    let c = paths(&["react.svg"]);
    assert_eq!(pick(&c, "react"), Some("react.svg"));
}

#[test]
fn test_select_exact_stem() {
    let c = paths(&["icon.svg", "go.svg"]);
    assert_eq!(pick(&c, "go"), Some("go.svg"));
}

#[test]
fn test_select_exact_stem_case_insensitive() {
    let c = paths(&["other.svg", "dir/GoLang.SVG"]);
    assert_eq!(pick(&c, "golang"), Some("dir/GoLang.SVG"));
}

#[test]
fn test_select_exact_stem_beats_plain() {
    let c = paths(&["vue-plain.svg", "vue.svg"]);
    assert_eq!(pick(&c, "vue"), Some("vue.svg"));
}

#[test]
fn test_select_stem_must_match_whole_name() {
    let c = paths(&["go-line.svg", "gopher.svg"]);
    assert_eq!(pick(&c, "go"), Some("go-line.svg"));
}

#[test]
fn test_select_plain() {
    let c = paths(&["c-line.svg", "c-PLAIN-wordmark.svg", "c-plain.svg"]);
    assert_eq!(pick(&c, "clang"), Some("c-PLAIN-wordmark.svg"));
}

#[test]
fn test_select_fallback_first() {
    let c = paths(&["b-line.svg", "a-line.svg", "z.svg"]);
    assert_eq!(pick(&c, "tech"), Some("b-line.svg"));
}

#[test]
fn test_select_empty() {
    let c: Vec<PathBuf> = Vec::new();
    assert_eq!(select_best_svg(&c, "anything"), None);
}

#[test]
fn test_select_tokens_match_file_name_only() {
    // "original" in a parent directory does not count
    let c = paths(&["original/x-line.svg", "x-plain.svg"]);
    assert_eq!(pick(&c, "x"), Some("x-plain.svg"));
}

#[cfg(unix)]
#[test]
fn test_select_non_utf8_name_still_matches_tokens() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let original = PathBuf::from(OsStr::from_bytes(b"\xff-original.svg"));
    let c = vec![PathBuf::from("a-line.svg"), original.clone()];
    assert_eq!(select_best_svg(&c, "a"), Some(original.as_path()));

    let plain = PathBuf::from(OsStr::from_bytes(b"icons/\xfe-plain.svg"));
    let c = vec![PathBuf::from("b-line.svg"), plain.clone()];
    assert_eq!(select_best_svg(&c, "b"), Some(plain.as_path()));
}

#[cfg(unix)]
#[test]
fn test_svg_stem_non_utf8_keeps_ascii() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let p = PathBuf::from(OsStr::from_bytes(b"go\xff.SVG"));
    assert_eq!(svg_stem(&p), "go\u{FFFD}");
}

// --- tools ---

#[test]
fn test_has_svg_extension() {
    assert!(has_svg_extension(Path::new("a/b.svg")));
    assert!(has_svg_extension(Path::new("B.SVG")));
    assert!(has_svg_extension(Path::new("c.Svg")));
    assert!(!has_svg_extension(Path::new("d.png")));
    assert!(!has_svg_extension(Path::new("svg")));
    assert!(!has_svg_extension(Path::new("e.svg.bak")));
}

#[test]
fn test_svg_stem() {
    assert_eq!(svg_stem(Path::new("dir/go.svg")), "go");
    assert_eq!(svg_stem(Path::new("Go.SVG")), "Go");
    assert_eq!(svg_stem(Path::new("a.b.svg")), "a.b");
    assert_eq!(svg_stem(Path::new("notes.txt")), "notes.txt");
}

#[test]
fn test_path_relative_under_base() {
    let base = PathBuf::from("/icons/go");
    let path = PathBuf::from("/icons/go/go-original.svg");
    assert_eq!(
        path_relative_to(&path, &base),
        Some(PathBuf::from("go-original.svg"))
    );
    assert_eq!(path_relative_to(Path::new("/other"), &base), None);
}

// --- worker count ---

fn limits(all_threads: usize) -> WorkerThreadLimits {
    WorkerThreadLimits {
        all_threads,
        ..WorkerThreadLimits::default()
    }
}

#[test]
fn test_worker_count_capped_at_eight() {
    assert_eq!(limits(32).worker_count(500, None), 8);
}

#[test]
fn test_worker_count_bounded_by_jobs() {
    assert_eq!(limits(32).worker_count(3, None), 3);
}

#[test]
fn test_worker_count_bounded_by_threads() {
    assert_eq!(limits(2).worker_count(500, None), 2);
}

#[test]
fn test_worker_count_no_jobs() {
    assert_eq!(limits(8).worker_count(0, None), 0);
    assert_eq!(limits(8).worker_count(0, Some(4)), 0);
}

#[test]
fn test_worker_count_override() {
    assert_eq!(limits(2).worker_count(500, Some(6)), 6);
    assert_eq!(limits(2).worker_count(500, Some(64)), 8);
    assert_eq!(limits(2).worker_count(500, Some(0)), 1);
}

// --- types ---

#[test]
fn test_job_output_file_name() {
    let job = Job::new("python", "/icons/python");
    assert_eq!(job.output_file_name(), "python.svg");
}

#[test]
fn test_tally_record() {
    let mut tally = Tally::default();
    tally.record(&Outcome {
        tech_name: "a".into(),
        result: Ok(PathBuf::from("a.svg")),
    });
    tally.record(&Outcome {
        tech_name: "b".into(),
        result: Err(JobError::NoFilesFound),
    });
    tally.record(&Outcome {
        tech_name: "c".into(),
        result: Err(JobError::NoSuitableFile),
    });
    assert_eq!(
        tally,
        Tally {
            processed: 1,
            skipped: 2
        }
    );
    assert_eq!(tally.total(), 3);
}

#[test]
fn test_job_error_kind_and_message() {
    assert_eq!(JobError::NoFilesFound.kind(), "NoFilesFound");
    assert_eq!(JobError::NoFilesFound.to_string(), "no SVG files found");
    let io = std::io::Error::other("disk full");
    let err = JobError::from(io);
    assert_eq!(err.kind(), "CopyFailed");
    assert!(err.to_string().contains("disk full"));
}

// --- opts / steps ---

#[test]
fn test_opts_icons_root() {
    let opts = Opts::default();
    assert_eq!(opts.icons_root(), PathBuf::from("devicon").join("icons"));
    let local = Opts {
        source: Some(PathBuf::from("/data/icons")),
        ..Opts::default()
    };
    assert_eq!(local.icons_root(), PathBuf::from("/data/icons"));
}

#[test]
fn test_planned_steps_clone() {
    assert_eq!(
        planned_steps(&Opts::default()),
        vec![
            Step::CloneRepository,
            Step::PruneClone,
            Step::CreateOutputDirectory,
            Step::ExtractSvgIcons,
            Step::Cleanup,
        ]
    );
}

#[test]
fn test_planned_steps_keep_clone() {
    let opts = Opts {
        keep_clone: true,
        ..Opts::default()
    };
    assert!(!planned_steps(&opts).contains(&Step::Cleanup));
}

#[test]
fn test_planned_steps_local_source() {
    let opts = Opts {
        source: Some(PathBuf::from("icons")),
        ..Opts::default()
    };
    assert_eq!(
        planned_steps(&opts),
        vec![Step::CreateOutputDirectory, Step::ExtractSvgIcons]
    );
}

#[test]
fn test_only_cleanup_is_best_effort() {
    assert!(Step::Cleanup.is_best_effort());
    assert!(!Step::CloneRepository.is_best_effort());
    assert!(!Step::ExtractSvgIcons.is_best_effort());
}

// --- config file / CLI ---

#[test]
fn test_toml_applies_present_fields_only() {
    let file = parse_svgpick_toml(
        r#"
[settings]
output = "out/icons"
threads = 3
keep_clone = true
"#,
    )
    .unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.output_dir, PathBuf::from("out/icons"));
    assert_eq!(opts.num_threads, Some(3));
    assert!(opts.keep_clone);
    assert_eq!(opts.repo_url, Opts::default().repo_url);
    assert_eq!(opts.source, None);
}

#[test]
fn test_toml_empty_is_ok() {
    let file = parse_svgpick_toml("").unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.output_dir, Opts::default().output_dir);
}

#[test]
fn test_toml_bad_type_is_error() {
    assert!(parse_svgpick_toml("[settings]\nthreads = \"many\"\n").is_err());
}

#[test]
fn test_cli_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".svgpick.toml"),
        "[settings]\noutput = \"from-file\"\nicons_subdir = \"glyphs\"\n",
    )
    .unwrap();
    let cli = Cli::parse_from(["svgpick", "-o", "from-cli", "-j", "2", "-v"]);
    let opts = setup_opts(&cli, dir.path()).unwrap();
    assert_eq!(opts.output_dir, PathBuf::from("from-cli"));
    assert_eq!(opts.icons_subdir, "glyphs");
    assert_eq!(opts.num_threads, Some(2));
    assert!(opts.verbose);
    assert!(!opts.keep_clone);
}

#[test]
fn test_cli_source_mode() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::parse_from(["svgpick", "--source", "/data/icons", "--keep-clone"]);
    let opts = setup_opts(&cli, dir.path()).unwrap();
    assert_eq!(opts.source, Some(PathBuf::from("/data/icons")));
    assert!(opts.keep_clone);
    assert!(!opts.uses_clone());
}

#[test]
fn test_malformed_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".svgpick.toml"),
        "[settings]\nthreads = \"many\"\n",
    )
    .unwrap();
    let cli = Cli::parse_from(["svgpick"]);
    let err = setup_opts(&cli, dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains(".svgpick.toml"));
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::parse_from(["svgpick"]);
    let opts = setup_opts(&cli, dir.path()).unwrap();
    assert_eq!(opts.output_dir, Opts::default().output_dir);
    assert!(opts.uses_clone());
}

// --- logger ---

#[test]
fn test_log_line_warn_names_source_module() {
    colored::control::set_override(false);
    let line = format_line(Level::Warn, "svgpick::pipeline::error_handler", "Skipped rust: x");
    assert_eq!(
        line,
        "[svgpick WARN svgpick::pipeline::error_handler] Skipped rust: x"
    );
}

#[test]
fn test_log_line_info_is_plain() {
    colored::control::set_override(false);
    let line = format_line(Level::Info, "svgpick::extractor", "Extraction completed.");
    assert_eq!(line, "[svgpick] Extraction completed.");
    assert!(!line.contains("svgpick::extractor"));
}

#[test]
fn test_verbose_raises_crate_level() {
    assert_eq!(crate_level(false), log::LevelFilter::Info);
    assert_eq!(crate_level(true), log::LevelFilter::Debug);
}
