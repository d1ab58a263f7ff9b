    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vi_keys_move() {
        assert_eq!(map_key(press(KeyCode::Down)), Some(Key::Next));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(Key::Next));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(Key::Next));
        assert_eq!(map_key(press(KeyCode::Up)), Some(Key::Prev));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(Key::Prev));
    }

    #[test]
    fn enter_selects_and_esc_backs_out() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Key::Select));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Key::Select));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Key::Escape));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Escape)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }
