use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_job").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults_fill_missing_fields() {
    let job: BlurJob = serde_json::from_str(r#"{ "input": "a.png", "output": "b.png" }"#).unwrap();
    assert_eq!(job.radius, DEFAULT_RADIUS);
    assert_eq!(job.format, ImportFormat::Auto);
}

#[test]
fn unknown_fields_are_rejected() {
    let res: Result<BlurJob, _> =
        serde_json::from_str(r#"{ "input": "a.png", "output": "b.png", "sigma": 2.0 }"#);
    assert!(res.is_err());
}

#[test]
fn validate_checks_radius_and_paths() {
    let mut job = BlurJob::new("a.png", "b.png");
    assert!(job.validate().is_ok());

    job.radius = MAX_RADIUS + 1;
    assert!(matches!(
        job.validate(),
        Err(BlurError::RadiusOutOfRange { .. })
    ));

    let same = BlurJob::new("a.png", "a.png");
    assert!(matches!(same.validate(), Err(BlurError::Validation(_))));
}

#[test]
fn load_resolves_paths_against_job_file() {
    let dir = scratch_dir("resolve");
    let path = dir.join("job.json");
    std::fs::write(
        &path,
        r#"{ "input": "in.png", "output": "/tmp/out.png", "radius": 4, "format": "a8" }"#,
    )
    .unwrap();

    let job = BlurJob::load(&path).unwrap();
    assert_eq!(job.input, dir.join("in.png"));
    assert_eq!(job.output, PathBuf::from("/tmp/out.png"));
    assert_eq!(job.radius, 4);
    assert_eq!(job.format, ImportFormat::A8);
}

#[test]
fn load_reports_missing_file() {
    let err = BlurJob::load(Path::new("target/unit_job/does_not_exist.json")).unwrap_err();
    assert!(matches!(err, BlurError::Other(_)));
    assert!(err.to_string().contains("open job"));
}

#[test]
fn load_reports_bad_json() {
    let dir = scratch_dir("bad_json");
    let path = dir.join("job.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = BlurJob::load(&path).unwrap_err();
    assert!(err.to_string().contains("parse job JSON"));
}
