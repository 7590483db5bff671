#[cfg(test)]
mod unit_tests {
    use crate::text::{
        capitalize_each_word, capitalize_first_and_downcase_rest, get_capitalization_type,
        last_part_looks_like_url, title_case_key_label,
    };
    use crate::{
        CapitalizationType, CodePointSet, Error, HexError, Locale, MatchLevel, ScriptId,
        hex_string_to_byte_array, is_letter_part_of_script, is_rtl_language, match_level,
        match_level_sorted_string, script_from_spell_checker_locale,
    };

    #[test]
    fn sorted_strings_order_best_first() {
        let mut keyed: Vec<(String, MatchLevel)> = MatchLevel::ALL
            .into_iter()
            .map(|level| (level.sorted_string(), level))
            .collect();
        keyed.sort();
        let order: Vec<MatchLevel> = keyed.into_iter().map(|(_, level)| level).collect();
        let mut expected = MatchLevel::ALL.to_vec();
        expected.reverse();
        assert_eq!(order, expected);
        assert_eq!(match_level_sorted_string(30), "00");
        assert_eq!(match_level_sorted_string(0), "30");
        assert_eq!(match_level_sorted_string(15), "15");
        assert_eq!(match_level_sorted_string(20), "10");
    }

    #[test]
    fn threshold_sits_at_any_match() {
        let matches: Vec<bool> = MatchLevel::ALL.iter().map(|l| l.is_match()).collect();
        assert_eq!(matches, [false, false, false, true, true, true, true]);
    }

    #[test]
    fn hebrew_is_rtl_under_either_code() {
        assert!(is_rtl_language(&Locale::from("he_IL")));
        assert!(is_rtl_language(&Locale::from("iw")));
        assert!(is_rtl_language(&Locale::from("ar_EG")));
        assert!(!is_rtl_language(&Locale::from("en_US")));
        assert!(!is_rtl_language(&Locale::root()));
        assert_eq!(script_from_spell_checker_locale(&Locale::from("he")), ScriptId::Hebrew);
    }

    #[test]
    fn errors_convert_into_crate_error() {
        fn decode(hex: &str) -> Result<Vec<u8>, Error> {
            Ok(hex_string_to_byte_array(hex)?)
        }
        let err = decode("abc").unwrap_err();
        assert!(matches!(err, Error::Hex(HexError::OddLength { len: 3 })));
        assert_eq!(
            err.to_string(),
            "input hex string length must be an even number, length = 3"
        );
    }

    #[test]
    fn locale_dependent_casing_across_modules() {
        let tr = Locale::from("tr");
        let az = Locale::from("az_AZ");
        let words = CodePointSet::from_chars(" ");
        assert_eq!(capitalize_each_word("ılık irmak", &words, &tr), "Ilık İrmak");
        assert_eq!(capitalize_first_and_downcase_rest("İZMİR", &az), "İzmir");
        assert_eq!(title_case_key_label("i", &az), "İ");
    }

    #[test]
    fn script_membership_of_typed_words() {
        let ru = script_from_spell_checker_locale(&Locale::from("ru"));
        assert!("слово".chars().all(|c| is_letter_part_of_script(c, ru)));
        assert!(!"word".chars().all(|c| is_letter_part_of_script(c, ru)));
        let hy = script_from_spell_checker_locale(&Locale::from("hy_AM"));
        assert_eq!(hy, ScriptId::Armenian);
        assert!("բառ".chars().all(|c| is_letter_part_of_script(c, hy)));
    }

    #[test]
    fn capitalization_and_url_on_same_input() {
        assert_eq!(get_capitalization_type("WWW.EXAMPLE.COM"), CapitalizationType::All);
        assert!(!last_part_looks_like_url("WWW.EXAMPLE.COM"));
        assert!(last_part_looks_like_url("www.example.com"));
    }

    #[test]
    fn level_values_are_stable() {
        let values: Vec<u8> = MatchLevel::ALL.iter().map(|l| l.value()).collect();
        assert_eq!(values, [0, 3, 6, 10, 15, 20, 30]);
        assert_eq!(MatchLevel::try_from(15), Ok(MatchLevel::LanguageMatch));
        assert_eq!(MatchLevel::try_from(16), Err(16));
        assert_eq!(match_level("fr_CA", "fr").to_string(), "language_match_country_differ");
    }
}
