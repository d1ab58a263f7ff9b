    use super::*;
    use serde_json::json;

    fn device() -> DeviceProfile {
        DeviceProfile {
            board: "m5stack-cardputer".to_string(),
            width: 240,
            height: 135,
        }
    }

    fn app(value: serde_json::Value) -> AppEntry {
        serde_json::from_value(value).expect("app entry")
    }

    #[test]
    fn single_pattern_string_is_a_regex() {
        let a = app(json!({ "slug": "a", "supported-devices": "cardputer$" }));
        assert_eq!(a.supported_devices, Some(vec!["cardputer$".to_string()]));
        assert!(is_compatible(&a, false, &device()));

        let b = app(json!({ "slug": "b", "supported-devices": "^lilygo" }));
        assert!(!is_compatible(&b, false, &device()));
    }

    #[test]
    fn any_pattern_in_a_list_is_enough() {
        let a = app(json!({ "slug": "a", "supported-devices": ["^lilygo", "m5stack-.*"] }));
        assert!(is_compatible(&a, false, &device()));
    }

    #[test]
    fn empty_pattern_list_matches_nothing_and_empty_string_means_any() {
        let none = app(json!({ "slug": "a", "supported-devices": [] }));
        assert!(!is_compatible(&none, false, &device()));

        let any = app(json!({ "slug": "b", "supported-devices": "" }));
        assert_eq!(any.supported_devices, None);
        assert!(is_compatible(&any, false, &device()));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        let a = app(json!({ "slug": "a", "supported-devices": ["(unclosed"] }));
        assert!(!is_compatible(&a, false, &device()));
    }

    #[test]
    fn themes_ignore_devices_and_match_resolution_exactly() {
        let fits = app(json!({
            "slug": "t1",
            "supported-devices": "^nothing$",
            "supported-screen-size": "240x135"
        }));
        let wrong = app(json!({ "slug": "t2", "supported-screen-size": "320x240" }));
        let any = app(json!({ "slug": "t3" }));

        assert!(is_compatible(&fits, true, &device()));
        assert!(!is_compatible(&wrong, true, &device()));
        assert!(is_compatible(&any, true, &device()));
    }

    #[test]
    fn screen_size_is_ignored_outside_themes() {
        let a = app(json!({ "slug": "a", "supported-screen-size": "320x240" }));
        assert!(is_compatible(&a, false, &device()));
    }

    #[test]
    fn filtering_rewrites_count_and_keeps_extra_fields() {
        let listing: CategoryListing = serde_json::from_value(json!({
            "category": "Tools",
            "count": 3,
            "apps": [
                { "slug": "keep", "supported-devices": "cardputer" },
                { "slug": "drop", "supported-devices": "t-embed" },
                { "slug": "plain" }
            ]
        }))
        .expect("listing");

        let filtered = filter_listing(listing, false, &device());
        let slugs: Vec<&str> = filtered.apps.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["keep", "plain"]);
        assert_eq!(filtered.count, 2);
        assert_eq!(filtered.extra.get("category"), Some(&json!("Tools")));
    }
