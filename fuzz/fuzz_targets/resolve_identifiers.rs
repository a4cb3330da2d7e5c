#![no_main]

use dom::build::{doc, div, text, textarea};
use dom::{Id, MemoryDocument};
use libfuzzer_sys::fuzz_target;
use selection_core::{ResolverConfig, resolve};

// Input layout: "<candidate attribute>\n<identifier>". The candidate sits
// next to a well-formed field that must stay resolvable whatever it holds.
fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    let (attribute, identifier) = src.split_once('\n').unwrap_or((src, src));

    let mut document = MemoryDocument::new(doc(vec![
        textarea(0, attribute, "fuzzed"),
        textarea(0, r#"{"id":"stable"}"#, "stable text"),
        div(0, vec![text(0, "outside")]),
    ]));
    // 1 fuzzed, 2 its text, 3 stable, 4 its text.
    document.select_in_control(Id(3), 1, 6);

    let config = ResolverConfig::default();
    let _ = resolve(&mut document, identifier, &config);

    let stable = resolve(&mut document, "stable", &config);
    assert!(stable.is_some() || attribute_shadows_stable(attribute));
});

// A fuzzed candidate that also derives to "stable" comes first and wins.
fn attribute_shadows_stable(attribute: &str) -> bool {
    selection_core::ElementKey::parse(attribute, "id")
        .is_ok_and(|key| key == selection_core::ElementKey::parse("stable", "id").unwrap())
}
