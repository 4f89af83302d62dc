//! Tests for the choices collection.

use super::*;
use crate::error::ChoicesError;
use lipgloss_extras::lipgloss;
use pretty_assertions::assert_eq;

fn menu() -> Choices {
    Choices::new(vec![
        Entry::from("Espresso"),
        Entry::from("Latte"),
        Separator::new("= Tea =").into(),
        Entry::from("Green"),
        Separator::default().into(),
        Entry::from(Choice::new("Water").with_value("h2o").with_attr("price", "0")),
    ])
}

fn names(choices: &[&Choice]) -> Vec<String> {
    choices.iter().map(|choice| choice.name().to_string()).collect()
}

fn texts<'a>(values: Vec<Option<Attr<'a>>>) -> Vec<Option<&'a str>> {
    values.into_iter().map(|value| value.and_then(|v| v.as_str())).collect()
}

fn plain_lines(choices: &Choices, _pointer: isize, _: ()) -> String {
    choices
        .iter()
        .map(|entry| match entry {
            Entry::Separator(separator) => separator.line().to_string(),
            Entry::Choice(choice) => choice.name().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_new_wraps_values_and_keeps_separators() {
    let choices = menu();

    assert_eq!(choices.len(), 6);
    assert_eq!(choices.real_len(), 4);
    assert!(choices.get(2).unwrap().is_separator());
    assert!(choices.get(4).unwrap().is_separator());
    assert_eq!(choices.get(0), Some(&Entry::Choice(Choice::new("Espresso"))));
}

#[test]
fn test_new_empty() {
    let choices = Choices::new(Vec::<Entry>::new());

    assert!(choices.is_empty());
    assert_eq!(choices.len(), 0);
    assert_eq!(choices.real_len(), 0);
    assert_eq!(choices.get(0), None);
    assert_eq!(choices.get_choice(0), None);
}

#[test]
fn test_string_values_become_choices() {
    let choices = Choices::new(vec!["a".to_string(), "b".to_string()]);
    let choice = choices.get_choice(1).unwrap();

    assert_eq!(choice.name(), "b");
    assert_eq!(choice.value(), "b");
    assert_eq!(choice.short(), "b");
}

#[test]
fn test_collect_from_iterator() {
    let choices: Choices = ["x", "y", "z"].into_iter().collect();
    assert_eq!(choices.real_len(), 3);
}

#[test]
fn test_real_len_never_exceeds_len() {
    let without_separators = Choices::new(["a", "b", "c"]);
    assert_eq!(without_separators.real_len(), without_separators.len());

    let with_separators = menu();
    assert!(with_separators.real_len() < with_separators.len());

    let only_separators = Choices::new(vec![Separator::default(), Separator::new("-")]);
    assert_eq!(only_separators.len(), 2);
    assert_eq!(only_separators.real_len(), 0);
}

#[test]
fn test_get_choice_follows_selectable_order() {
    let choices = menu();
    let expected: Vec<&Choice> = choices.iter().filter_map(Entry::as_choice).collect();

    for (real, choice) in expected.iter().enumerate() {
        assert_eq!(choices.get_choice(real), Some(*choice));
    }
    assert_eq!(choices.get_choice(expected.len()), None);
}

#[test]
fn test_index_translation() {
    let choices = menu();

    assert_eq!(choices.raw_index_of(0), Some(0));
    assert_eq!(choices.raw_index_of(2), Some(3));
    assert_eq!(choices.raw_index_of(3), Some(5));
    assert_eq!(choices.raw_index_of(4), None);

    assert_eq!(choices.real_index_of(3), Some(2));
    assert_eq!(choices.real_index_of(2), None); // separator
    assert_eq!(choices.real_index_of(99), None);

    for real in 0..choices.real_len() {
        let raw = choices.raw_index_of(real).unwrap();
        assert!(raw >= real);
        assert_eq!(choices.real_index_of(raw), Some(real));
    }
}

#[test]
fn test_invalid_selectors_are_absent() {
    let choices = menu();

    assert_eq!(choices.get(-1), None);
    assert_eq!(choices.get_choice(-1i64), None);
    assert_eq!(choices.get(6usize), None);
    assert_eq!(choices.get_choice(4usize), None);
    assert_eq!(choices.get(1.5), None);
    assert_eq!(choices.get_choice(0.5f32), None);
    assert_eq!(choices.get(f64::NAN), None);
    assert_eq!(choices.get("1"), None);
    assert_eq!(choices.get_choice(String::from("0")), None);
    assert_eq!(choices.get_choice(None::<usize>), None);
}

#[test]
fn test_integral_float_selectors_resolve() {
    let choices = menu();

    assert_eq!(choices.get_choice(2.0).unwrap().name(), "Green");
    assert!(choices.get(2.0f32).unwrap().is_separator());
    assert_eq!(choices.get_choice(Some(1u8)).unwrap().name(), "Latte");
}

#[test]
fn test_set_real_len_always_fails() {
    let mut choices = menu();
    assert_eq!(
        choices.set_real_len(0),
        Err(ChoicesError::InvariantViolation {
            field: "real_len",
            attempted: 0,
        })
    );
    assert_eq!(choices.real_len(), 4);

    let mut empty: Choices = Choices::default();
    assert!(empty.set_real_len(3).is_err());
    assert_eq!(empty.real_len(), 0);
}

#[test]
fn test_invariant_violation_message() {
    let mut choices = menu();
    let err = choices.set_real_len(2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot set `real_len` of a Choices collection (attempted 2)"
    );
}

#[test]
fn test_push_appends_choices() {
    let mut choices = menu();
    let entries = choices.push(["Mocha", "Cortado"]);

    assert_eq!(entries.len(), 8);
    assert_eq!(choices.len(), 8);
    assert_eq!(choices.real_len(), 6);
    assert_eq!(choices.get_choice(4).unwrap().name(), "Mocha");
    assert_eq!(choices.get_choice(5).unwrap().name(), "Cortado");
}

#[test]
fn test_push_never_creates_separators() {
    let mut choices: Choices = Choices::default();
    choices.push(vec![Choice::new("──────────────"), Choice::new("")]);

    assert_eq!(choices.len(), 2);
    assert_eq!(choices.real_len(), 2);
    assert!(choices.iter().all(|entry| !entry.is_separator()));
}

#[test]
fn test_push_nothing() {
    let mut choices = menu();
    choices.push(Vec::<&str>::new());
    assert_eq!(choices.len(), 6);
    assert_eq!(choices.real_len(), 4);
}

#[test]
fn test_truncate_recomputes_selectable_view() {
    let mut choices = menu();

    choices.truncate(3);
    assert_eq!(choices.len(), 3);
    assert_eq!(choices.real_len(), 2);
    assert_eq!(choices.get_choice(2), None);

    choices.truncate(10);
    assert_eq!(choices.len(), 3);
}

#[test]
fn test_grow_pads_with_separators() {
    let mut choices = Choices::new(["a"]);

    choices.grow(3);
    assert_eq!(choices.len(), 3);
    assert_eq!(choices.real_len(), 1);
    assert_eq!(choices.get(2), Some(&Entry::Separator(Separator::new(""))));

    choices.grow(1);
    assert_eq!(choices.len(), 3);
}

#[test]
fn test_set_len() {
    let mut choices = menu();

    choices.set_len(2);
    assert_eq!((choices.len(), choices.real_len()), (2, 2));

    choices.set_len(4);
    assert_eq!((choices.len(), choices.real_len()), (4, 2));

    choices.set_len(4);
    assert_eq!((choices.len(), choices.real_len()), (4, 2));
}

#[test]
fn test_filter_where_skips_separators() {
    let choices = Choices::new(vec![
        Entry::from("x"),
        Separator::new("x").into(),
        Entry::from("y"),
        Entry::from(Choice::new("second").with_value("x")),
    ]);

    let found = choices.filter_where(&WhereClause::new("value", "x"));
    assert_eq!(names(&found), vec!["x", "second"]);
}

#[test]
fn test_filter_where_requires_every_attribute() {
    let choices = Choices::new(vec![
        Choice::new("a").with_attr("size", "l").with_attr("hot", "yes"),
        Choice::new("b").with_attr("size", "l"),
        Choice::new("c").with_attr("hot", "yes"),
    ]);

    let clause = WhereClause::new("size", "l").and("hot", "yes");
    assert_eq!(names(&choices.filter_where(&clause)), vec!["a"]);

    let nothing = WhereClause::new("missing", "l");
    assert!(choices.filter_where(&nothing).is_empty());
}

#[test]
fn test_pluck() {
    let choices = menu();

    assert_eq!(
        texts(choices.pluck("name")),
        vec![Some("Espresso"), Some("Latte"), Some("Green"), Some("Water")]
    );
    assert_eq!(
        texts(choices.pluck("value")),
        vec![Some("Espresso"), Some("Latte"), Some("Green"), Some("h2o")]
    );
    assert_eq!(
        choices.pluck("price"),
        vec![None, None, None, Some(Attr::Text("0"))]
    );
    assert!(Choices::<()>::default().pluck("name").is_empty());
}

#[test]
fn test_for_each_visits_every_entry_in_order() {
    let choices = menu();
    let mut visited = Vec::new();

    choices.for_each(|index, entry| visited.push((index, entry.is_separator())));

    assert_eq!(
        visited,
        vec![
            (0, false),
            (1, false),
            (2, true),
            (3, false),
            (4, true),
            (5, false)
        ]
    );
}

#[test]
fn test_filter_walks_raw_entries() {
    let choices = menu();

    let separators = choices.filter(Entry::is_separator);
    assert_eq!(separators.len(), 2);

    let long_names = choices.filter(|entry| entry.as_choice().is_some_and(|c| c.name().len() > 5));
    assert_eq!(long_names.len(), 1);
    assert_eq!(choices.len(), 6);
}

#[test]
fn test_real_iter_matches_get_choice() {
    let choices = menu();
    let from_iter: Vec<&Choice> = choices.real_iter().collect();
    let from_get: Vec<&Choice> = (0..choices.real_len())
        .filter_map(|real| choices.get_choice(real))
        .collect();
    assert_eq!(from_iter, from_get);
}

#[test]
fn test_default_render_marks_pointer() {
    let choices = menu();
    let output = lipgloss::strip_ansi(&choices.render(2, ()));

    assert_eq!(
        output,
        "  Espresso\n  Latte\n  = Tea =\n❯ Green\n  ──────────────\n  Water"
    );
    assert!(!choices.is_paginated());
}

#[test]
fn test_default_render_out_of_range_pointer() {
    let choices = Choices::new(["a", "b"]);
    assert_eq!(lipgloss::strip_ansi(&choices.render(-1, ())), "  a\n  b");
    assert_eq!(lipgloss::strip_ansi(&choices.render(2, ())), "  a\n  b");
}

#[test]
fn test_set_render_unpaginated() {
    let mut choices = Choices::new((0..10).map(|i| format!("L{}", i)));
    choices.set_render(plain_lines, RenderOptions::default());

    assert!(!choices.is_paginated());
    assert_eq!(choices.render(0, ()).split('\n').count(), 10);
}

#[test]
fn test_set_render_paginated() {
    let mut choices = Choices::new((0..10).map(|i| format!("L{}", i)));
    choices.set_render(plain_lines, RenderOptions { paginated: true });

    assert!(choices.is_paginated());
    assert_eq!(choices.render(0, ()), "L7\nL8\nL9\nL0\nL1\nL2\nL3");
    assert_eq!(choices.render(5, ()), "L2\nL3\nL4\nL5\nL6\nL7\nL8");
}

#[test]
fn test_paginated_render_short_list_unchanged() {
    let mut choices = menu();
    choices.set_render(plain_lines, RenderOptions { paginated: true });

    for pointer in -2..6 {
        assert_eq!(choices.render(pointer, ()), plain_lines(&choices, pointer, ()));
    }
}

#[test]
fn test_paginated_render_reflects_push() {
    let mut choices = menu();
    choices.set_render(plain_lines, RenderOptions { paginated: true });
    choices.push(["Mocha", "Cortado"]);

    // Eight lines now; the window starts five lines in.
    assert_eq!(
        choices.render(0, ()),
        "Water\nMocha\nCortado\nEspresso\nLatte\n= Tea =\nGreen"
    );
}

#[test]
fn test_render_receives_pointer() {
    let mut choices = Choices::new(["a", "b", "c"]);
    choices.set_render(
        |choices: &Choices, pointer: isize, _: ()| {
            let name = choices
                .get_choice(pointer)
                .map(Choice::name)
                .unwrap_or("none");
            format!("{}:{}", pointer, name)
        },
        RenderOptions::default(),
    );

    assert_eq!(choices.render(1, ()), "1:b");
    assert_eq!(choices.render(-1, ()), "-1:none");
}

#[test]
fn test_paginated_default_list() {
    let mut choices = Choices::new((0..12).map(|i| format!("item {}", i)));
    choices.set_render(
        |choices: &Choices, pointer: isize, _: ()| list(choices, pointer, &ChoiceStyles::default()),
        RenderOptions { paginated: true },
    );

    for pointer in 0..12 {
        let output = lipgloss::strip_ansi(&choices.render(pointer, ()));
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], format!("❯ item {}", pointer));
    }
}

#[test]
fn test_clone_keeps_renderer() {
    let mut choices = Choices::new((0..10).map(|i| format!("L{}", i)));
    choices.set_render(plain_lines, RenderOptions { paginated: true });

    let copy = choices.clone();
    assert!(copy.is_paginated());
    assert_eq!(copy.render(5, ()), choices.render(5, ()));
}

#[test]
fn test_separator_display_is_dimmed_line() {
    let separator = Separator::default();
    assert_eq!(lipgloss::strip_ansi(&separator.to_string()), "──────────────");
    assert_eq!(separator.line().chars().count(), SEPARATOR_WIDTH);
    assert!(separator.line().chars().all(|c| c == SEPARATOR_CHAR));
}

#[test]
fn test_choice_attr_overrides_builtin_fields() {
    let choice = Choice::new("Name").with_attr("value", "v").with_attr("short", "s");

    assert_eq!(choice.value(), "v");
    assert_eq!(choice.short(), "s");
    assert_eq!(choice.attr("name"), Some(Attr::Text("Name")));
}

fn marked_lines(choices: &Choices<char>, pointer: isize, marker: char) -> String {
    choices
        .real_iter()
        .enumerate()
        .map(|(real, choice)| {
            if real as isize == pointer {
                format!("{}{}", marker, choice.name())
            } else {
                choice.name().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_forwards_args_unpaginated() {
    let mut choices = Choices::<char>::from_values(["a", "b", "c"]);
    choices.set_render(marked_lines, RenderOptions::default());

    assert_eq!(choices.render(1, '*'), "a\n*b\nc");
    assert_eq!(choices.render(2, '>'), "a\nb\n>c");
}

#[test]
fn test_render_forwards_args_paginated() {
    let mut choices: Choices<char> = (0..10).map(|i| format!("L{}", i)).collect();
    choices.set_render(marked_lines, RenderOptions { paginated: true });

    assert_eq!(choices.render(0, '>'), "L7\nL8\nL9\n>L0\nL1\nL2\nL3");
    assert_eq!(choices.render(5, '*'), "L2\nL3\nL4\n*L5\nL6\nL7\nL8");
}

#[test]
fn test_render_args_reach_shared_render_fn() {
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = std::sync::Arc::clone(&seen);
    let render: RenderFn<String> =
        std::sync::Arc::new(move |_choices: &Choices<String>, pointer: isize, title: String| {
            if let Ok(mut seen) = log.lock() {
                seen.push((pointer, title.clone()));
            }
            title
        });

    let mut plain = Choices::<String>::from_values(["a"]);
    plain.set_render_fn(std::sync::Arc::clone(&render), RenderOptions::default());
    let mut paged = Choices::<String>::from_values(["b"]);
    paged.set_render_fn(render, RenderOptions { paginated: true });

    assert_eq!(plain.render(0, "first".to_string()), "first");
    assert_eq!(paged.render(3, "second".to_string()), "second");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(0, "first".to_string()), (3, "second".to_string())]
    );
}

#[test]
fn test_default_render_ignores_args() {
    let choices = Choices::<char>::from_values(["a", "b"]);
    assert_eq!(lipgloss::strip_ansi(&choices.render(0, '*')), "❯ a\n  b");
}

#[test]
fn test_typed_attrs() {
    let choice = Choice::new("Soda")
        .with_attr("price", 3)
        .with_attr("disabled", true)
        .with_attr("size", "3");

    assert_eq!(choice.attr("price"), Some(Attr::Int(3)));
    assert_eq!(choice.attr("disabled"), Some(Attr::Bool(true)));
    assert_eq!(choice.attr("size"), Some(Attr::Text("3")));
    assert_eq!(choice.attr("price").map(|v| v.to_string()), Some("3".to_string()));
}

#[test]
fn test_filter_where_compares_typed_values() {
    let choices = Choices::new(vec![
        Entry::from(Choice::new("Tea").with_attr("disabled", true)),
        Entry::from(Choice::new("Coffee").with_attr("disabled", "true")),
        Separator::default().into(),
        Entry::from(Choice::new("Water").with_attr("disabled", false).with_attr("price", 0)),
    ]);

    let disabled = choices.filter_where(&WhereClause::new("disabled", true));
    assert_eq!(names(&disabled), vec!["Tea"]);

    let as_text = choices.filter_where(&WhereClause::new("disabled", "true"));
    assert_eq!(names(&as_text), vec!["Coffee"]);

    let free = WhereClause::new("price", 0).and("disabled", false);
    assert_eq!(names(&choices.filter_where(&free)), vec!["Water"]);
    assert!(choices.filter_where(&WhereClause::new("price", "0")).is_empty());

    assert_eq!(
        choices.pluck("disabled"),
        vec![
            Some(Attr::Bool(true)),
            Some(Attr::Text("true")),
            Some(Attr::Bool(false))
        ]
    );
}

#[test]
fn test_builtin_attrs_stay_text() {
    let choice = Choice::new("Tea").with_attr("value", 7);
    assert_eq!(choice.value(), "7");
    assert_eq!(choice.attr("value"), Some(Attr::Text("7")));
}
