// textmask-core/tests/mask_properties_tests.rs
use textmask_core::{registered_types, resolve, MaskHandler, MaskOptions, MaskType};

/// Raw values made only of characters each mask accepts, within capacity.
fn cases() -> Vec<(&'static str, MaskOptions, Vec<&'static str>)> {
    vec![
        ("custom", MaskOptions::default().with_mask("(999) 999-9999"), vec!["5551234567", "555", "5"]),
        ("custom", MaskOptions::default().with_mask("AAA-9999"), vec!["abc1234", "ab"]),
        ("custom", MaskOptions::default().with_mask("**-**"), vec!["ab-c", "a-b-", "--", "x"]),
        ("credit-card", MaskOptions::default(), vec!["4111111111111111", "378282246310005", "30569309025904", "4111"]),
        ("cpf", MaskOptions::default(), vec!["52998224725", "529"]),
        ("cnpj", MaskOptions::default(), vec!["11222333000181", "1122"]),
        ("money", MaskOptions::default(), vec!["123456", "5", "0", "100"]),
        ("money", MaskOptions::default().with_zero_cents(true), vec!["1234", "7"]),
        (
            "money",
            MaskOptions::default().with_unit("$").with_separator(".").with_delimiter(",").with_suffix_unit(" USD"),
            vec!["99999999", "1"],
        ),
        ("datetime", MaskOptions::default(), vec!["31122024235959", "3112"]),
        ("datetime", MaskOptions::default().with_format("YYYY-MM-DD"), vec!["20240229"]),
        ("only-numbers", MaskOptions::default(), vec!["0123", "9"]),
        ("cel-phone", MaskOptions::default(), vec!["11987654321", "1134567890", "11"]),
        ("cel-phone", MaskOptions::default().with_mask_type("INTERNATIONAL"), vec!["551199998888"]),
        ("zip-code", MaskOptions::default(), vec!["01310100", "013"]),
        ("none", MaskOptions::default(), vec!["anything (goes) 1-2"]),
    ]
}

#[test]
fn test_round_trip_on_accepted_alphabet() {
    for (mask_type, options, raws) in cases() {
        let mask = resolve(Some(mask_type));
        for raw in raws {
            let display = mask.get_value(raw, &options);
            assert_eq!(
                mask.get_raw_value(&display, &options),
                raw,
                "round trip failed for {} with {:?} (display {:?})",
                mask_type,
                raw,
                display
            );
        }
    }
}

#[test]
fn test_masking_is_idempotent() {
    for (mask_type, options, raws) in cases() {
        let mask = resolve(Some(mask_type));
        for raw in raws {
            let display = mask.get_value(raw, &options);
            let again = mask.get_value(&mask.get_raw_value(&display, &options), &options);
            assert_eq!(again, display, "remask changed {} value {:?}", mask_type, raw);
        }
    }
}

#[test]
fn test_empty_input_identity() {
    for (mask_type, options, _) in cases() {
        let mask = resolve(Some(mask_type));
        assert_eq!(mask.get_value("", &options), "", "mask of empty for {}", mask_type);
        assert_eq!(mask.get_raw_value("", &options), "", "unmask of empty for {}", mask_type);
    }
    for mask_type in registered_types() {
        let mask = resolve(Some(mask_type.as_str()));
        assert_eq!(mask.get_value("", &MaskOptions::default()), "");
    }
}

#[test]
fn test_validate_is_pure() {
    for (mask_type, options, raws) in cases() {
        let mask = resolve(Some(mask_type));
        for raw in raws {
            let first = mask.validate(raw, &options);
            for _ in 0..3 {
                assert_eq!(mask.validate(raw, &options), first);
            }
        }
    }
}

#[test]
fn test_completeness_survives_appended_characters() {
    let cases = [
        ("custom", MaskOptions::default().with_mask("(999) 999-9999"), "5551234567", "89"),
        ("cpf", MaskOptions::default(), "52998224725", "1"),
        ("cnpj", MaskOptions::default(), "11222333000181", "99"),
        ("credit-card", MaskOptions::default(), "4111111111111111", "1"),
        ("cel-phone", MaskOptions::default(), "11987654321", "0"),
        ("cel-phone", MaskOptions::default(), "1134567890", "1"),
    ];
    for (mask_type, options, complete, extra) in cases {
        let mask = resolve(Some(mask_type));
        assert!(mask.validate(complete, &options), "{} {:?} should be complete", mask_type, complete);
        let longer = format!("{}{}", complete, extra);
        assert!(mask.validate(&longer, &options), "{} {:?} flipped to incomplete", mask_type, longer);
    }
}

#[test]
fn test_overflow_never_panics_and_is_truncated() {
    let options = MaskOptions::default().with_mask("(999) 999-9999");
    let mask = resolve(Some("custom"));
    let display = mask.get_value(&"7".repeat(1000), &options);
    assert_eq!(display, "(777) 777-7777");
}

#[test]
fn test_money_with_oversized_precision_does_not_panic() {
    let options = MaskOptions::from_json(r#"{"precision": 18446744073709551615}"#).unwrap();
    let mask = resolve(Some("money"));
    let display = mask.get_value("123", &options);
    assert!(display.ends_with("123"));
    assert_eq!(mask.get_raw_value(&display, &options), "123");
}

#[test]
fn test_garbage_input_degrades_gracefully() {
    let garbage = "\u{0}ÿ\u{202e}🙂 --//(( ";
    for mask_type in registered_types() {
        let mask = resolve(Some(mask_type.as_str()));
        let options = MaskOptions::default().with_mask("(999) 999-9999");
        let display = mask.get_value(garbage, &options);
        let _ = mask.get_raw_value(&display, &options);
        let _ = mask.validate(garbage, &options);
    }
}

#[test]
fn test_phone_scenarios() {
    let options = MaskOptions::default().with_mask("(999) 999-9999");
    let mask = resolve(Some("custom"));
    assert_eq!(mask.get_value("5551234567", &options), "(555) 123-4567");
    assert_eq!(mask.get_value("555123", &options), "(555) 123");
    assert_eq!(mask.get_raw_value("(555) 123-4567", &options), "5551234567");
    assert!(mask.validate("5551234567", &options));
    assert!(!mask.validate("555123", &options));

    let fallback = resolve(None);
    assert_eq!(fallback.mask_type(), MaskType::None);
    assert_eq!(fallback.get_value("abc", &MaskOptions::default()), "abc");
}

#[test]
fn test_handlers_are_shareable_across_threads() {
    let mask = resolve(Some("cpf"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || mask.get_value("52998224725", &MaskOptions::default()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "529.982.247-25");
    }
}
