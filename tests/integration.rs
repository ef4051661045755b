//! Integration tests through the public API: the compiled pattern as a
//! caller filtering names would use it, and the full `run()` flow.

use wildfind::{Config, Mode, Pattern, Position, Request, SearchQuery};

fn glob(raw: &str) -> Pattern {
    Pattern::new(raw, false, false)
}

fn run(pattern: &str, config: Config, range: Option<&str>, input: &str) -> String {
    let request = Request {
        pattern,
        config,
        range,
    };
    wildfind::run(&request, input).unwrap()
}

// ---------------------------------------------------------------------------
// Matching laws
// ---------------------------------------------------------------------------

#[test]
fn whole_text_match_follows_glob_semantics() {
    let cases = [
        ("*.rs", "main.rs", true),
        ("*.rs", "main.rsx", false),
        ("m??n.*", "main.rs", true),
        ("m?n.*", "main.rs", false),
        ("*a*b*", "xxaybzz", true),
        ("*a*b*", "xxbyazz", false),
        ("a*a*a", "aaa", true),
        ("a*a*a", "aa", false),
        ("**", "", true),
        ("?*", "", false),
    ];
    for (raw, text, expected) in cases {
        assert_eq!(
            glob(raw).matches(text, 0, text.len()),
            expected,
            "{raw:?} against {text:?}"
        );
    }
}

#[test]
fn compiling_twice_is_idempotent() {
    let a = Pattern::new("*b?d*", true, false);
    let b = Pattern::new("*b?d*", true, false);
    assert_eq!(a, b);
    for text in ["abcde", "ABXDE", "bd", "", "xbyd"] {
        assert_eq!(a.is_match(text), b.is_match(text), "{text}");
        assert_eq!(a.find_in(text), b.find_in(text), "{text}");
    }
}

#[test]
fn escaping_round_trip() {
    let literal = r"a*b?c\d";
    let escaped: String = literal
        .chars()
        .flat_map(|c| {
            if matches!(c, '*' | '?' | '\\') {
                vec!['\\', c]
            } else {
                vec![c]
            }
        })
        .collect();
    let p = glob(&escaped);
    assert!(p.is_match(literal));

    // Change one position at a time
    for (i, _) in literal.char_indices() {
        let mut changed = literal.to_string();
        changed.replace_range(i..=i, "Z");
        assert!(!p.is_match(&changed), "{changed}");
    }
}

#[test]
fn shortest_match_law() {
    assert_eq!(glob("a*b").find("axbyb", 0, 5), Some(Position::new(0, 3)));
}

#[test]
fn interior_wildcard_find() {
    assert_eq!(glob("*??*").find("abcdf", 0, 5), Some(Position::new(0, 2)));
}

#[test]
fn literal_mode_wildcards_are_inert() {
    let p = Pattern::new("a*b", false, true);
    assert!(p.matches("a*b", 0, 3));
    assert!(!p.matches("axb", 0, 3));
}

#[test]
fn case_insensitive_match() {
    assert!(Pattern::new("FILE?TXT", true, false).matches("file1txt", 0, 8));
}

#[test]
fn empty_pattern() {
    let p = glob("");
    assert_eq!(p.find("anything", 0, 8), Some(Position::new(0, 0)));
    assert!(p.matches("", 0, 0));
    assert!(!p.matches("x", 0, 1));
}

#[test]
fn inverted_and_empty_ranges() {
    for raw in ["", "*", "a", "a*b", "?"] {
        assert!(!glob(raw).matches("abc", 2, 1), "{raw}");
    }
    assert_eq!(glob("*").find("abc", 2, 1), None);
    assert_eq!(glob("a").find("abc", 1, 1), None);
    assert_eq!(glob("").find("abc", 1, 1), Some(Position::new(1, 1)));
}

#[test]
fn shared_across_threads() {
    let p = std::sync::Arc::new(glob("*.log"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || p.is_match(&format!("run{i}.log")))
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn search_query_end_to_end() {
    let names = ["NullPointerException", "NumberFormatException", "nullable"];
    let q = SearchQuery::new("NPE");
    let hits: Vec<&str> = names.iter().copied().filter(|n| q.matches(n)).collect();
    assert_eq!(hits, vec!["NullPointerException"]);

    let q = SearchQuery::new("*format*");
    let hits: Vec<&str> = names.iter().copied().filter(|n| q.matches(n)).collect();
    assert_eq!(hits, vec!["NumberFormatException"]);
}

// ---------------------------------------------------------------------------
// run(): formatted output
// ---------------------------------------------------------------------------

const FILES: &str = "src/main.rs\nsrc/lib.rs\nREADME.md\nCargo.toml\n";

#[test]
fn run_plain_match() {
    let out = run("*.rs", Config::default(), None, FILES);
    assert!(out.starts_with("# Filter: \"*.rs\" [match]"), "{out}");
    assert!(out.contains("2 of 4 lines"), "{out}");
    assert!(out.contains("1  src/main.rs"), "{out}");
    assert!(out.contains("2  src/lib.rs"), "{out}");
    assert!(!out.contains("README"), "{out}");
}

#[test]
fn run_find_json() {
    let config = Config {
        mode: Mode::Find,
        json: true,
        ..Config::default()
    };
    let out = run("lib", config, None, FILES);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total_lines"], 4);
    assert_eq!(value["matches"].as_array().unwrap().len(), 1);
    assert_eq!(value["matches"][0]["line"], 2);
    assert_eq!(value["matches"][0]["span"]["start"], 4);
    assert_eq!(value["matches"][0]["span"]["end"], 7);
}

#[test]
fn run_with_range() {
    let config = Config {
        mode: Mode::Match,
        ..Config::default()
    };
    // Only the first four bytes of each line are considered
    let out = run("src?", config, Some("0..4"), FILES);
    assert!(out.contains("2 of 4 lines"), "{out}");
}

#[test]
fn run_negative_range_start_clamps_to_zero() {
    let config = Config {
        mode: Mode::Match,
        ..Config::default()
    };
    let out = run("src?", config, Some("-1..4"), FILES);
    assert!(out.contains("2 of 4 lines"), "{out}");
}

#[test]
fn run_rejects_bad_range() {
    let request = Request {
        pattern: "*",
        config: Config::default(),
        range: Some("4-8"),
    };
    let err = wildfind::run(&request, FILES).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("4-8"), "{err}");
}

#[test]
fn run_ignore_case_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wildfind.toml");
    std::fs::write(&path, "ignore_case = true\n").unwrap();
    let config = Config::load(&path).unwrap();

    let out = run("readme*", config, None, FILES);
    assert!(out.contains("1 of 4 lines"), "{out}");
    assert!(out.contains("README.md"), "{out}");
}
