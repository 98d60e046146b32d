use ladder_bot::{edit_distance_within, is_adjacent};

#[test]
fn test_identical_words_not_adjacent() {
    assert!(!is_adjacent("cat", "cat"));
    assert!(!is_adjacent("a", "a"));
    assert!(!is_adjacent("", ""));
}

#[test]
fn test_substitution() {
    assert!(is_adjacent("cat", "cot"));
    assert!(is_adjacent("cold", "cord"));
    assert!(is_adjacent("dog", "dot"));

    assert!(!is_adjacent("cat", "dog"));
    assert!(!is_adjacent("cat", "cow"));
    assert!(!is_adjacent("cold", "warm"));
}

#[test]
fn test_insertion() {
    assert!(is_adjacent("cat", "cats"));
    assert!(is_adjacent("at", "cat"));
    assert!(is_adjacent("cat", "cart"));
    assert!(is_adjacent("", "a"));

    assert!(!is_adjacent("cat", "carts"));
}

#[test]
fn test_deletion() {
    assert!(is_adjacent("cats", "cat"));
    assert!(is_adjacent("cat", "at"));
    assert!(is_adjacent("late", "ate"));
    assert!(is_adjacent("a", ""));

    assert!(!is_adjacent("carts", "cat"));
}

#[test]
fn test_length_difference_over_one() {
    assert!(!is_adjacent("cat", "cards"));
    assert!(!is_adjacent("", "ab"));
    assert!(!is_adjacent("a", "abc"));
}

#[test]
fn test_one_length_apart_but_two_edits() {
    // Same multiset of letters, but no single insertion lines them up.
    assert!(!is_adjacent("abc", "cabx"));
    assert!(!is_adjacent("dog", "gody"));
}

#[test]
fn test_symmetry() {
    let pairs = [
        ("cat", "cot"),
        ("cat", "cats"),
        ("cat", "at"),
        ("cat", "dog"),
        ("cat", "cat"),
        ("", "a"),
        ("cold", "cards"),
    ];

    for (a, b) in pairs {
        assert_eq!(
            is_adjacent(a, b),
            is_adjacent(b, a),
            "adjacency not symmetric for {:?} / {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_edit_distance_equal_strings() {
    assert!(edit_distance_within("cat", "cat", 0));
    assert!(edit_distance_within("", "", 0));
    assert!(edit_distance_within("cat", "cat", 5));
}

#[test]
fn test_edit_distance_thresholds() {
    assert!(edit_distance_within("cat", "cot", 1));
    assert!(!edit_distance_within("cat", "cot", 0));

    // The classic example: kitten -> sitting is exactly 3 edits.
    assert!(edit_distance_within("kitten", "sitting", 3));
    assert!(!edit_distance_within("kitten", "sitting", 2));
}

#[test]
fn test_edit_distance_length_gap() {
    assert!(!edit_distance_within("a", "abc", 1));
    assert!(edit_distance_within("a", "abc", 2));
    assert!(edit_distance_within("", "abc", 3));
    assert!(!edit_distance_within("", "abc", 2));
}

#[test]
fn test_edit_distance_prefix_alignment() {
    // An intermediate table cell can exceed the bound even when the final
    // distance does not; the row-wise cutoff must not fire here.
    assert!(edit_distance_within("abc", "bc", 1));
    assert!(edit_distance_within("abcdef", "bcdef", 1));
}

#[test]
fn test_adjacent_implies_within_one_edit() {
    let pairs = [("cat", "cot"), ("cat", "cats"), ("at", "cat"), ("late", "ate")];

    for (a, b) in pairs {
        assert!(is_adjacent(a, b));
        assert!(edit_distance_within(a, b, 1));
    }
}

#[test]
fn test_zero_edits_is_not_one_hop() {
    // Distance zero is within any bound, but a hop needs exactly one edit.
    assert!(edit_distance_within("word", "word", 1));
    assert!(!is_adjacent("word", "word"));
}
