// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, window};

wasm_bindgen_test_configure!(run_in_browser);

fn add_cards(tokens: &[&str]) -> Vec<HtmlElement> {
    let doc = window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    tokens
        .iter()
        .map(|token| {
            let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
            el.set_class_name("card");
            el.set_attribute("data-card", token).unwrap();
            body.append_child(&el).unwrap();
            el
        })
        .collect()
}

#[wasm_bindgen_test]
fn clicking_a_pair_flips_both_cards() {
    let cards = add_cards(&["A", "B", "A", "B"]);
    memory_match::start_game().unwrap();

    for el in &cards {
        let order: i32 = el.style().get_property_value("order").unwrap().parse().unwrap();
        assert!((0..12).contains(&order));
    }

    cards[0].click();
    assert!(cards[0].class_list().contains("flip"));
    cards[2].click();
    assert!(cards[0].class_list().contains("flip"));
    assert!(cards[2].class_list().contains("flip"));
    assert!(!cards[1].class_list().contains("flip"));
}
