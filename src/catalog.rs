//! Registry of every pattern in the crate, with lookup by name or alias.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::behavioral::{
    chain, command, interpreter, mediator, memento, observer, state, strategy, template, visitor,
};
use crate::creational::{abstract_factory, builder, factory, prototype, singleton};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

pub type RunFn = fn(&mut dyn Write) -> Result<()>;

#[derive(Serialize)]
pub struct Pattern {
    pub name: &'static str,
    pub title: &'static str,
    pub aliases: &'static [&'static str],
    pub category: Category,
    pub intent: &'static str,
    #[serde(skip)]
    run: RunFn,
}

impl Pattern {
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        (self.run)(out)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

pub static PATTERNS: &[Pattern] = &[
    // Creational
    Pattern {
        name: "abstract_factory",
        title: "Abstract Factory",
        aliases: &["abstractfactory", "kit"],
        category: Category::Creational,
        intent: "Create families of related products without naming their concrete types.",
        run: abstract_factory::run,
    },
    Pattern {
        name: "builder",
        title: "Builder",
        aliases: &[],
        category: Category::Creational,
        intent: "Assemble a complex product step by step under a director.",
        run: builder::run,
    },
    Pattern {
        name: "factory",
        title: "Factory Method",
        aliases: &["factory_method"],
        category: Category::Creational,
        intent: "Let a factory object decide which product to create.",
        run: factory::run,
    },
    Pattern {
        name: "prototype",
        title: "Prototype",
        aliases: &["clone"],
        category: Category::Creational,
        intent: "Create new objects by copying an existing prototype.",
        run: prototype::run,
    },
    Pattern {
        name: "singleton",
        title: "Singleton",
        aliases: &[],
        category: Category::Creational,
        intent: "Share one lazily created, thread-safe instance process-wide.",
        run: singleton::run,
    },
    // Structural
    Pattern {
        name: "adapter",
        title: "Adapter",
        aliases: &["wrapper"],
        category: Category::Structural,
        intent: "Make an incompatible interface fit the one clients expect.",
        run: adapter::run,
    },
    Pattern {
        name: "bridge",
        title: "Bridge",
        aliases: &[],
        category: Category::Structural,
        intent: "Vary an abstraction and its implementation independently.",
        run: bridge::run,
    },
    Pattern {
        name: "composite",
        title: "Composite",
        aliases: &["tree"],
        category: Category::Structural,
        intent: "Treat leaves and containers of a tree uniformly.",
        run: composite::run,
    },
    Pattern {
        name: "decorator",
        title: "Decorator",
        aliases: &[],
        category: Category::Structural,
        intent: "Wrap a component to add behavior and cost layer by layer.",
        run: decorator::run,
    },
    Pattern {
        name: "facade",
        title: "Facade",
        aliases: &[],
        category: Category::Structural,
        intent: "Hide several subsystems behind one simple call.",
        run: facade::run,
    },
    Pattern {
        name: "flyweight",
        title: "Flyweight",
        aliases: &[],
        category: Category::Structural,
        intent: "Share intrinsic state between many fine-grained objects.",
        run: flyweight::run,
    },
    Pattern {
        name: "proxy",
        title: "Proxy",
        aliases: &["virtual_proxy"],
        category: Category::Structural,
        intent: "Stand in for a real resource, loading and caching it on demand.",
        run: proxy::run,
    },
    // Behavioral
    Pattern {
        name: "chain_of_responsibility",
        title: "Chain of Responsibility",
        aliases: &["chain", "cor"],
        category: Category::Behavioral,
        intent: "Pass a request along handlers until one of them acts on it.",
        run: chain::run,
    },
    Pattern {
        name: "command",
        title: "Command",
        aliases: &["action"],
        category: Category::Behavioral,
        intent: "Wrap a receiver call in an object an invoker triggers uniformly.",
        run: command::run,
    },
    Pattern {
        name: "interpreter",
        title: "Interpreter",
        aliases: &[],
        category: Category::Behavioral,
        intent: "Evaluate sentences of a small language through an expression tree.",
        run: interpreter::run,
    },
    Pattern {
        name: "mediator",
        title: "Mediator",
        aliases: &[],
        category: Category::Behavioral,
        intent: "Route peer interactions through one central coordinator.",
        run: mediator::run,
    },
    Pattern {
        name: "memento",
        title: "Memento",
        aliases: &["snapshot"],
        category: Category::Behavioral,
        intent: "Capture and restore an object's state without exposing it.",
        run: memento::run,
    },
    Pattern {
        name: "observer",
        title: "Observer",
        aliases: &["publish_subscribe", "pubsub"],
        category: Category::Behavioral,
        intent: "Notify registered listeners whenever a subject changes.",
        run: observer::run,
    },
    Pattern {
        name: "state",
        title: "State",
        aliases: &[],
        category: Category::Behavioral,
        intent: "Delegate behavior to a swappable current-state object.",
        run: state::run,
    },
    Pattern {
        name: "strategy",
        title: "Strategy",
        aliases: &["policy"],
        category: Category::Behavioral,
        intent: "Swap interchangeable algorithms behind one interface.",
        run: strategy::run,
    },
    Pattern {
        name: "template",
        title: "Template Method",
        aliases: &["template_method"],
        category: Category::Behavioral,
        intent: "Fix an algorithm's skeleton and let implementors fill in steps.",
        run: template::run,
    },
    Pattern {
        name: "visitor",
        title: "Visitor",
        aliases: &[],
        category: Category::Behavioral,
        intent: "Add operations over a structure of elements via double dispatch.",
        run: visitor::run,
    },
];

lazy_static! {
    static ref INDEX: HashMap<String, &'static Pattern> = {
        let mut index = HashMap::new();
        for pattern in PATTERNS {
            index.insert(pattern.name.to_string(), pattern);
            for alias in pattern.aliases {
                index.insert(alias.to_string(), pattern);
            }
        }
        index
    };
}

/// Lower-cases and maps each run of `-`, `_` and whitespace to one `_`, so
/// "Chain-Of  Responsibility" and "chain_of_responsibility" are the same key.
pub fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => '_',
            c if c.is_whitespace() => '_',
            other => other.to_ascii_lowercase(),
        })
        .dedup_by(|a, b| *a == '_' && *b == '_')
        .collect()
}

pub fn all() -> &'static [Pattern] {
    PATTERNS
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    INDEX.get(&normalize(name)).copied()
}

/// Like [`find`], but unknown names become an error carrying the closest
/// canonical name as a suggestion.
pub fn resolve(name: &str) -> Result<&'static Pattern> {
    find(name).ok_or_else(|| {
        let names: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
        PatternError::unknown_pattern(name, find_similar(&normalize(name), &names))
    })
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Pattern> {
    PATTERNS.iter().filter(move |p| p.category == category)
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, a_char) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }

    previous[b_chars.len()]
}

pub fn find_similar(typo: &str, candidates: &[&str]) -> Option<String> {
    const MAX_DISTANCE: usize = 2;

    candidates
        .iter()
        .map(|candidate| (levenshtein_distance(typo, candidate), *candidate))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_aliases_are_unique() {
        let mut seen = HashSet::new();
        for pattern in PATTERNS {
            assert!(seen.insert(pattern.name), "duplicate {}", pattern.name);
            for alias in pattern.aliases {
                assert!(seen.insert(alias), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn test_find_normalizes() {
        assert_eq!(find("Chain-Of Responsibility").unwrap().name, "chain_of_responsibility");
        assert_eq!(find("  DECORATOR ").unwrap().name, "decorator");
        assert_eq!(find("abstract-factory").unwrap().name, "abstract_factory");
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(normalize("chain  of responsibility"), "chain_of_responsibility");
        assert_eq!(normalize("Abstract -\tFactory"), "abstract_factory");
        assert_eq!(find("chain  of__responsibility").unwrap().name, "chain_of_responsibility");
    }

    #[test]
    fn test_find_aliases() {
        assert_eq!(find("cor").unwrap().name, "chain_of_responsibility");
        assert_eq!(find("pubsub").unwrap().name, "observer");
        assert_eq!(find("template-method").unwrap().name, "template");
    }

    #[test]
    fn test_resolve_unknown_suggests() {
        match resolve("obsrver") {
            Err(PatternError::UnknownPattern { name, suggestion }) => {
                assert_eq!(name, "obsrver");
                assert_eq!(suggestion.as_deref(), Some("observer"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_without_close_match() {
        match resolve("database") {
            Err(PatternError::UnknownPattern { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_by_category_counts() {
        assert_eq!(by_category(Category::Creational).count(), 5);
        assert_eq!(by_category(Category::Structural).count(), 7);
        assert_eq!(by_category(Category::Behavioral).count(), 10);
        assert_eq!(all().len(), 22);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("sitting", "kitten"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }

    #[test]
    fn test_serializes_without_run_fn() {
        let json = serde_json::to_value(find("proxy").unwrap()).unwrap();
        assert_eq!(json["name"], "proxy");
        assert_eq!(json["category"], "structural");
        assert!(json.get("run").is_none());
    }
}
