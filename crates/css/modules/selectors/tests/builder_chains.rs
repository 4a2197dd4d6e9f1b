use css_selectors::{
    Combinator, FragmentKind, SelectorError, Specificity, attr, class, combine, element, id,
    pseudo_class, pseudo_element,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn id_then_repeated_classes() -> anyhow::Result<()> {
    init_logging();
    let sel = id("main").class("container")?.class("editable")?;
    assert_eq!(sel.stringify(), "#main.container.editable");
    assert_eq!(sel.specificity(), Specificity(1, 2, 0));
    Ok(())
}

#[test]
fn element_attribute_pseudo_class() -> anyhow::Result<()> {
    init_logging();
    let sel = element("a").attr("href$=\".png\"")?.pseudo_class("focus")?;
    assert_eq!(sel.stringify(), "a[href$=\".png\"]:focus");
    Ok(())
}

#[test]
fn second_id_is_a_duplicate() {
    init_logging();
    let result = id("id1").id("id2");
    assert_eq!(
        result,
        Err(SelectorError::DuplicateViolation {
            kind: FragmentKind::Id
        })
    );
}

#[test]
fn class_after_attribute_is_out_of_order() {
    init_logging();
    let result = attr("disabled").class("button");
    assert_eq!(
        result,
        Err(SelectorError::OrderViolation {
            previous: FragmentKind::Attribute,
            next: FragmentKind::Class,
        })
    );
}

#[test]
fn many_classes_never_duplicate() -> anyhow::Result<()> {
    init_logging();
    let mut sel = class("c0");
    for index in 1..32 {
        sel = sel.class(&format!("c{index}"))?;
    }
    assert_eq!(sel.stringify().matches('.').count(), 32);
    assert_eq!(sel.specificity(), Specificity(0, 32, 0));
    Ok(())
}

#[test]
fn every_entry_point_accepts_later_kinds() -> anyhow::Result<()> {
    init_logging();
    assert_eq!(element("p").pseudo_element("first-line")?.stringify(), "p::first-line");
    assert_eq!(id("nav").attr("role=\"menu\"")?.stringify(), "#nav[role=\"menu\"]");
    assert_eq!(class("btn").pseudo_class("active")?.stringify(), ".btn:active");
    assert_eq!(attr("open").pseudo_class("hover")?.stringify(), "[open]:hover");
    assert_eq!(
        pseudo_class("root").pseudo_element("selection")?.stringify(),
        ":root::selection"
    );
    assert_eq!(pseudo_element("before").stringify(), "::before");
    Ok(())
}

#[test]
fn combine_adjacent_siblings() -> anyhow::Result<()> {
    init_logging();
    let sel = combine(
        element("div").id("main")?,
        Combinator::AdjacentSibling,
        element("table").id("data")?,
    );
    assert_eq!(sel.stringify(), "div#main + table#data");
    Ok(())
}

#[test]
fn combine_nests_from_string_tokens() -> anyhow::Result<()> {
    init_logging();
    let inner = combine(
        element("p").pseudo_class("focus")?,
        Combinator::from_token("~")?,
        element("a").attr("href$=\".png\"")?,
    );
    let sel = combine(
        element("div").id("main")?.class("container")?.class("draggable")?,
        Combinator::from_token(">")?,
        inner,
    );
    assert_eq!(
        sel.stringify(),
        "div#main.container.draggable > p:focus ~ a[href$=\".png\"]"
    );
    assert_eq!(sel.specificity(), Specificity(1, 4, 3));
    Ok(())
}

#[test]
fn unknown_token_is_rejected() {
    init_logging();
    assert!(matches!(
        Combinator::from_token("||"),
        Err(SelectorError::UnknownCombinator(token)) if token == "||"
    ));
}
