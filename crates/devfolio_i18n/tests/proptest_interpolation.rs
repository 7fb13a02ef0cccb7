//! Property tests for message interpolation through a translator.

use devfolio_i18n::{t, LocaleInfo, LocaleRegistry, Message, Translator};
use proptest::prelude::*;

const EN: &str = r#"{
    "a": { "b": { "c": "Hello {name}, welcome back." } },
    "cart": { "items": "{count, plural, one {1 item} other {{count} items}}" },
    "interpolation": {
        "experience": "{years} years building with {technology}"
    }
}"#;

fn translator() -> Translator {
    let registry =
        LocaleRegistry::new(vec![LocaleInfo::new("en", "English", "🇬🇧")], "en").unwrap();
    let mut tr = Translator::new(registry);
    tr.load_json_str("en", EN).unwrap();
    tr
}

proptest! {
    #[test]
    fn supplied_placeholders_are_replaced(name in "[^{}]{0,20}") {
        let tr = translator();
        let out = tr.translate("en", &Message::new("a.b.c").arg("name", name.clone()));
        prop_assert!(!out.contains("{name}"), "placeholder {{name}} was not replaced: {}", out);
        prop_assert_eq!(out, format!("Hello {name}, welcome back."));
    }

    #[test]
    fn numbers_are_stringified(years in 1i64..50, technology in "[A-Za-z.]{1,12}") {
        let tr = translator();
        let msg = Message::new("interpolation.experience")
            .arg("years", years)
            .arg("technology", technology.clone());
        let out = tr.translate("en", &msg);
        prop_assert_eq!(out, format!("{years} years building with {technology}"));
    }

    #[test]
    fn plural_picks_one_only_for_exactly_one(count in 0i64..10_000) {
        let tr = translator();
        let out = tr.translate("en", &Message::new("cart.items").arg("count", count));
        if count == 1 {
            prop_assert_eq!(out, "1 item");
        } else {
            prop_assert_eq!(out, format!("{count} items"));
        }
    }

    #[test]
    fn unknown_keys_echo_the_key(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let tr = translator();
        prop_assume!(tr.dictionary("en").and_then(|d| d.get_text(&key)).is_none());
        prop_assert_eq!(tr.translate("en", &Message::new(key.clone())), key);
    }
}

#[test]
fn unsupplied_placeholders_are_kept() {
    let tr = translator();
    assert_eq!(tr.translate("en", &t!("a.b.c")), "Hello {name}, welcome back.");
}

#[test]
fn plural_scenario() {
    let tr = translator();
    assert_eq!(tr.translate("en", &t!("cart.items", { count: 1 })), "1 item");
    let five = tr.translate("en", &t!("cart.items", { count: 5 }));
    assert!(five.contains('5'));
    assert!(five.contains("items"));
}
