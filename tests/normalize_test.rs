use playlist_sync::matching::normalize;

#[test]
fn test_normalize_strips_parentheses() {
    assert_eq!(normalize("Song (Remix)"), "Song Remix");
}

#[test]
fn test_normalize_strips_arrow_but_keeps_spaces() {
    assert_eq!(normalize("Song ➔ Remix"), "Song  Remix");
}

#[test]
fn test_normalize_strips_commas_and_apostrophes() {
    assert_eq!(normalize("Hello, It's Me"), "Hello Its Me");
    assert_eq!(normalize("Don’t Stop"), "Dont Stop");
}

#[test]
fn test_normalize_strips_mangled_sequences() {
    // "Don’t Stop" and "A ➔ B" decoded with the wrong charset
    assert_eq!(normalize("Donâ€™t Stop"), "Dont Stop");
    assert_eq!(normalize("A âž” B"), "A  B");
}

#[test]
fn test_normalize_leaves_clean_titles_alone() {
    for title in ["Song One", "UPPER lower", "Track 2", "Ça va", ""] {
        assert_eq!(normalize(title), title);
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let titles = [
        "Song (Remix)",
        "Donâ€™t Stop",
        "â€(™)",
        "âž(,)”",
        "Hello, It's (Me) ➔ Again",
    ];

    for title in titles {
        let once = normalize(title);
        assert_eq!(normalize(&once), once, "not idempotent for {title:?}");
    }
}

#[test]
fn test_normalize_removes_sequences_formed_by_stripping() {
    // removing the parentheses joins the mangled apostrophe
    assert_eq!(normalize("Aâ€(™)B"), "AB");
}
