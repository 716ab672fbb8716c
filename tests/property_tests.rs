use numstr::{
    NumStrFormatSpec, NumberFieldSymbolPosition, NumberSymbolGroup, NumberSymbolSpec,
    NumberSymbolsSpec, SymbolTriple, TextFieldSpecFiller,
};
use proptest::prelude::*;

fn position_strategy() -> impl Strategy<Value = NumberFieldSymbolPosition> {
    prop_oneof![
        Just(NumberFieldSymbolPosition::InsideNumField),
        Just(NumberFieldSymbolPosition::OutsideNumField),
    ]
}

fn symbol_text() -> impl Strategy<Value = String> {
    "[-+()$€£ ]{0,3}"
}

fn symbols_spec_strategy() -> impl Strategy<Value = NumberSymbolsSpec> {
    (
        (symbol_text(), symbol_text(), position_strategy()),
        (symbol_text(), symbol_text(), position_strategy()),
        (symbol_text(), symbol_text(), position_strategy()),
    )
        .prop_map(|(p, n, z)| {
            NumberSymbolsSpec::new_symbols_strings(
                SymbolTriple::new(p.0.as_str(), p.1.as_str(), p.2),
                SymbolTriple::new(n.0.as_str(), n.1.as_str(), n.2),
                SymbolTriple::new(z.0.as_str(), z.1.as_str(), z.2),
            )
        })
}

proptest! {
    #[test]
    fn prop_clone_and_copy_in_are_equal(spec in symbols_spec_strategy()) {
        let cloned = spec.clone();
        prop_assert_eq!(&cloned, &spec);

        let mut target = NumberSymbolsSpec::signed_default_us_paren();
        target.copy_in(&spec);
        prop_assert_eq!(target, spec);
    }

    #[test]
    fn prop_emptied_spec_is_nop(spec in symbols_spec_strategy()) {
        let mut spec = spec;
        spec.empty();
        prop_assert!(spec.is_nop());
        prop_assert_eq!(spec, NumberSymbolsSpec::new_nop());
    }

    #[test]
    fn prop_leading_text_survives_construction(
        text in "[-+$€]{1,4}",
        position in position_strategy(),
    ) {
        let spec = NumberSymbolSpec::new_leading(&text, position);
        prop_assert_eq!(spec.leading_str(), text);
        prop_assert_eq!(spec.leading_position(), position);
        prop_assert!(spec.trailing_symbols().is_empty());
    }

    #[test]
    fn prop_filler_width_is_chars_times_count(
        chars in "[-=*•─]{1,5}",
        count in 1usize..200,
    ) {
        let filler = TextFieldSpecFiller::new(&chars, count).unwrap();
        prop_assert_eq!(filler.text_width(), chars.chars().count() * count);
        prop_assert_eq!(filler.formatted_text().chars().count(), filler.text_width());
    }

    #[test]
    fn prop_failed_filler_setter_leaves_value_unchanged(
        chars in "[-=*]{1,3}",
        count in 1usize..50,
        bad_count in prop_oneof![Just(0usize), 1_000_001usize..2_000_000],
    ) {
        let mut filler = TextFieldSpecFiller::new(&chars, count).unwrap();
        let before = filler.clone();
        prop_assert!(filler.set_text_filler("#", bad_count).is_err());
        prop_assert!(filler.set_text_filler("", count).is_err());
        prop_assert_eq!(filler, before);
    }

    #[test]
    fn prop_failed_currency_setter_leaves_value_unchanged(leading in "[$£]{1,2}") {
        let mut currency =
            NumberSymbolSpec::new_leading(&leading, NumberFieldSymbolPosition::InsideNumField);
        let before = currency.clone();
        let result = currency.set_trailing_currency(
            "",
            Default::default(),
            NumberFieldSymbolPosition::InsideNumField,
        );
        prop_assert!(result.is_err());
        prop_assert_eq!(currency, before);
    }

    #[test]
    fn prop_nop_group_adds_no_symbols(
        integer in "[1-9][0-9]{0,8}",
        fraction in "[0-9]{0,4}",
    ) {
        let value = if fraction.is_empty() {
            integer.clone()
        } else {
            format!("{integer}.{fraction}")
        };
        let spec = NumStrFormatSpec::new(NumberSymbolGroup::new_nop());
        prop_assert_eq!(spec.format(&value).unwrap(), value);
    }
}
