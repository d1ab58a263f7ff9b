    use super::*;
    use crate::model::AppConfig;

    #[test]
    fn catalog_root_goes_to_main_mirror() {
        let cfg = AppConfig::default();
        let url = format!("{}releases/categories.json", cfg.catalog_url);
        assert_eq!(
            rewrite_url(&url, &cfg.rewrites),
            "http://ghp.iceis.co.uk/service/main/releases/categories.json"
        );
    }

    #[test]
    fn other_raw_content_goes_to_manual_mirror() {
        let cfg = AppConfig::default();
        assert_eq!(
            rewrite_url(
                "https://raw.githubusercontent.com/owner/repo/abc123/scripts/tool.js",
                &cfg.rewrites
            ),
            "http://ghp.iceis.co.uk/service/manual/owner/repo/abc123/scripts/tool.js"
        );
    }

    #[test]
    fn unmatched_urls_pass_through() {
        let cfg = AppConfig::default();
        assert_eq!(
            rewrite_url("http://localhost:8080/x.json", &cfg.rewrites),
            "http://localhost:8080/x.json"
        );
        assert_eq!(rewrite_url("http://a/b", &[]), "http://a/b");
    }

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(
            encode_spaces("BruceDevices/App-Store/App Store"),
            "BruceDevices/App-Store/App%20Store"
        );
    }
