    use super::*;

    fn app(slug: &str, version: &str) -> AppEntry {
        serde_json::from_value(serde_json::json!({
            "name": slug,
            "slug": slug,
            "version": version,
        }))
        .expect("app entry")
    }

    #[test]
    fn status_follows_installed_version() {
        let mut versions = InstalledVersions::default();
        assert_eq!(versions.status(&app("wifi-scan", "1.2")), ScriptStatus::NotInstalled);

        versions.record("wifi-scan", "1.1", "abc");
        assert_eq!(versions.status(&app("wifi-scan", "1.2")), ScriptStatus::UpdateAvailable);
        assert_eq!(versions.status(&app("wifi-scan", "1.1")), ScriptStatus::UpToDate);
    }

    #[test]
    fn presence_alone_means_installed() {
        let mut versions = InstalledVersions::default();
        versions.record("ghost", "", "abc");
        assert!(versions.is_installed("ghost"));
        assert_eq!(versions.version_of("ghost"), Some(""));
        assert_eq!(versions.status(&app("ghost", "1.0")), ScriptStatus::UpdateAvailable);
        assert!(versions.has_update(&app("ghost", "1.0")));
    }

    #[test]
    fn persisted_shape_is_keyed_by_slug() {
        let mut versions = InstalledVersions::default();
        versions.record("a/b/c", "2.0", "deadbeef");
        let json = serde_json::to_value(&versions).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "a/b/c": { "version": "2.0", "commit": "deadbeef" } })
        );
        assert!(versions.forget("a/b/c"));
        assert!(!versions.forget("a/b/c"));
    }
