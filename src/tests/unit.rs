mod unit_tests {
    use super::lock_global_behaviour;
    use crate::{HumanIdError, Options, is_valid, normalize, validate};

    #[test]
    fn well_known_english_writer() {
        let _g = lock_global_behaviour();
        assert_eq!(
            normalize("Well-known English writer", Options::new()).unwrap(),
            "well-known-english-writer"
        );
    }

    #[test]
    fn raw_english_writer() {
        let _g = lock_global_behaviour();
        assert_eq!(
            normalize(
                "Well-known English writer",
                Options::new().normalize(false).downcase(false)
            )
            .unwrap(),
            "Well-known English writer"
        );
    }

    #[test]
    fn pushkin() {
        let _g = lock_global_behaviour();
        assert_eq!(
            normalize("Пушкин, Александр Сергеевич", Options::new()).unwrap(),
            "pushkin-aleksandr-sergeevich"
        );
    }

    #[test]
    fn raw_pushkin() {
        let _g = lock_global_behaviour();
        assert_eq!(
            normalize(
                "Пушкин, Александр Сергеевич",
                Options::new().normalize(false).downcase(false)
            )
            .unwrap(),
            "Pushkin, Aleksandr Sergeevich"
        );
    }

    #[test]
    fn array_input() {
        let _g = lock_global_behaviour();
        let parts = vec!["Tolstoy".to_string(), "Лев".to_string()];
        assert_eq!(normalize(parts, Options::new()).unwrap(), "tolstoy-lev");
    }

    #[test]
    fn boundaries_and_runs() {
        let _g = lock_global_behaviour();
        assert_eq!(normalize("  --Hello,,  World!!  ", Options::new()).unwrap(), "hello-world");
        assert_eq!(normalize("", Options::new()).unwrap(), "");
        assert_eq!(normalize("?!", Options::new()).unwrap(), "");
    }

    #[test]
    fn validity() {
        let _g = lock_global_behaviour();
        assert!(is_valid("abc-123"));
        assert!(!is_valid("-abc"));
        assert!(!is_valid("abc-"));
        assert!(!is_valid(""));
        assert!(!is_valid("a".repeat(256)));
        assert!(is_valid("a".repeat(255)));
    }

    #[test]
    fn strict_validation() {
        let _g = lock_global_behaviour();
        assert!(validate("valid-id").is_ok());
        assert!(matches!(
            validate("bad id!"),
            Err(HumanIdError::MalformedIdentifier)
        ));
    }
}
