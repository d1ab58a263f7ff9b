    use super::*;

    #[derive(Default)]
    struct Canvas {
        fills: Vec<Bounds>,
        outlines: Vec<(Bounds, Rgb)>,
        texts: Vec<(String, i32, i32, TextStyle)>,
    }

    impl Display for Canvas {
        fn width(&self) -> i32 {
            240
        }
        fn height(&self) -> i32 {
            135
        }
        fn fill_rect(&mut self, bounds: Bounds, _color: Rgb) {
            self.fills.push(bounds);
        }
        fn draw_rect(&mut self, bounds: Bounds, color: Rgb) {
            self.outlines.push((bounds, color));
        }
        fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
            self.texts.push((text.to_string(), x, y, style));
        }
    }

    #[test]
    fn popup_box_fits_longest_line() {
        let m = Metrics::new(240, 135);
        let b = popup_bounds(&m, &["Deleted successfully!".to_string()]);
        assert_eq!(b.w, 21 * 6 + 40);
        assert_eq!(b.h, 28);
        assert_eq!(b.x, (240 - b.w) / 2);
        assert_eq!(b.y, 67 - 14);
    }

    #[test]
    fn popup_box_is_capped_by_screen_width() {
        let m = Metrics::new(240, 135);
        let b = popup_bounds(&m, &["x".repeat(40)]);
        assert_eq!(b.w, 220);
    }

    #[test]
    fn popup_draws_each_wrapped_line_in_orange() {
        let mut canvas = Canvas::default();
        let m = Metrics::of(&canvas);
        draw_popup(
            &mut canvas,
            &m,
            "WiFi not connected. Connect via WiFi menu first.",
        );
        assert_eq!(canvas.outlines.len(), 1);
        assert_eq!(canvas.outlines[0].1, Rgb::ORANGE);
        let lines: Vec<&str> = canvas.texts.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(lines, vec!["WiFi not connected. Connect via WiFi", "menu first."]);
        assert_eq!(canvas.texts[1].2 - canvas.texts[0].2, 8);
    }

    #[test]
    fn menu_marks_the_selected_option() {
        let mut canvas = Canvas::default();
        let m = Metrics::of(&canvas);
        draw_menu(&mut canvas, &m, &["Install", "Back"], 1);
        let b = menu_bounds(&m, 2);
        assert_eq!((b.w, b.h), (200, 56));
        assert_eq!(canvas.texts[0].0, "  Install");
        assert_eq!(canvas.texts[0].3.color, Rgb::GREY);
        assert_eq!(canvas.texts[1].0, "> Back");
        assert_eq!(canvas.texts[1].3.color, Rgb::GREEN);
        assert_eq!(canvas.texts[1].2, b.y + 26);
    }
