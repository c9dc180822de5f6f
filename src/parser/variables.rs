//! # Variable Substitution
//!
//! Replaces `$name`, `${name}` and `${name/search/replace}` references with
//! values parsed earlier in the file.
//!
//! Substitution is a single left-to-right pass: an inserted value is never
//! scanned again, so `a="$a$a"` doubles once instead of expanding forever.
//! Unknown names and unsupported expansions stay as literal text. An
//! escaped `\$` becomes a plain `$`.

use std::collections::HashMap;

use regex::Captures;

use super::patterns::VARIABLE_RE;

/// Values of the assignments seen so far, in file order.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: HashMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Record `value` only if `key` has not been assigned.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        self.vars
            .entry(key.to_string())
            .or_insert_with(|| value.into());
    }

    /// Substitute references using the variables recorded so far.
    pub fn substitute(&self, value: &str) -> String {
        substitute(value, &self.vars)
    }
}

/// Substitute `$name`, `${name}` and `${name/search[/replace]}` in `value`.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use apkmeta::parser::substitute;
///
/// let vars = HashMap::from([("pkgname".to_string(), "hello-world".to_string())]);
/// assert_eq!(substitute("$pkgname-doc", &vars), "hello-world-doc");
/// assert_eq!(substitute("${pkgname/hello-}", &vars), "world");
/// assert_eq!(substitute("$unknown ${pkgver%.*}", &vars), "$unknown ${pkgver%.*}");
/// assert_eq!(substitute(r"costs \$5", &vars), "costs $5");
/// ```
pub fn substitute(value: &str, known_vars: &HashMap<String, String>) -> String {
    VARIABLE_RE
        .replace_all(value, |caps: &Captures| replace_one(caps, known_vars))
        .into_owned()
}

fn replace_one(caps: &Captures, known_vars: &HashMap<String, String>) -> String {
    let whole = &caps[0];

    // ${name/search/replace}
    if let (Some(name), Some(search)) = (caps.get(1), caps.get(2)) {
        let Some(current) = known_vars.get(name.as_str()) else {
            return not_found(name.as_str(), whole);
        };
        let replacement = caps.get(3).map_or("", |m| m.as_str());
        tracing::debug!(reference = whole, "pattern substitution");
        return current.replacen(search.as_str(), replacement, 1);
    }

    // ${name} or $name
    if let Some(name) = caps.get(4).or_else(|| caps.get(5)) {
        return match known_vars.get(name.as_str()) {
            Some(current) => {
                tracing::debug!(reference = whole, value = %current, "substituted variable");
                current.clone()
            }
            None => not_found(name.as_str(), whole),
        };
    }

    // escaped dollar
    "$".to_string()
}

fn not_found(name: &str, whole: &str) -> String {
    tracing::debug!(variable = name, reference = whole, "variable not found, keeping literal");
    whole.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> VariableStore {
        let mut store = VariableStore::new();
        for (k, v) in pairs {
            store.set(*k, *v);
        }
        store
    }

    #[test]
    fn test_plain_and_braced() {
        let vars = store(&[("pkgname", "hello"), ("pkgver", "1.2")]);
        assert_eq!(vars.substitute("$pkgname-$pkgver"), "hello-1.2");
        assert_eq!(vars.substitute("${pkgname}_${pkgver}.tar.gz"), "hello_1.2.tar.gz");
    }

    #[test]
    fn test_unknown_left_literal() {
        let vars = store(&[("pkgname", "hello")]);
        assert_eq!(vars.substitute("$srcdir/$pkgname"), "$srcdir/hello");
        assert_eq!(vars.substitute("${builddir}"), "${builddir}");
        assert_eq!(vars.substitute("${pkgname/x/y} ${nope/x/y}"), "hello ${nope/x/y}");
    }

    #[test]
    fn test_pattern_replacement() {
        let vars = store(&[("pkgname", "variable-replacements"), ("pkgver", "1234")]);
        assert_eq!(
            vars.substitute("${pkgname/variable-} ${pkgname/-replacements/} ${pkgname/variable/string} $pkgver"),
            "replacements variable string-replacements 1234"
        );
    }

    #[test]
    fn test_pattern_replaces_first_occurrence_only() {
        let vars = store(&[("v", "a-a-a")]);
        assert_eq!(vars.substitute("${v/a/b}"), "b-a-a");
    }

    #[test]
    fn test_no_rescan_of_inserted_values() {
        let vars = store(&[("a", "$b"), ("b", "boom")]);
        assert_eq!(vars.substitute("$a"), "$b");

        let vars = store(&[("depends", "first")]);
        assert_eq!(vars.substitute("$depends $depends"), "first first");
    }

    #[test]
    fn test_unsupported_expansions_are_opaque() {
        let vars = store(&[("pkgver", "1.2.3")]);
        assert_eq!(vars.substitute("${pkgver%.*}"), "${pkgver%.*}");
        assert_eq!(vars.substitute("$(uname -m)"), "$(uname -m)");
        assert_eq!(vars.substitute("$((1 + 2))"), "$((1 + 2))");
    }

    #[test]
    fn test_escaped_dollar() {
        let vars = store(&[("pkgname", "hello")]);
        assert_eq!(vars.substitute(r"\$pkgname $pkgname"), "$pkgname hello");
        assert_eq!(vars.substitute(r"costs \$5 for $pkgname"), "costs $5 for hello");
    }

    #[test]
    fn test_longest_name_wins() {
        let vars = store(&[("pkg", "short"), ("pkgname", "long")]);
        assert_eq!(vars.substitute("$pkgname"), "long");
        assert_eq!(vars.substitute("${pkg}name"), "shortname");
    }

    #[test]
    fn test_store_overwrite() {
        let mut vars = store(&[("depends", "first")]);
        let next = vars.substitute("$depends second");
        vars.set("depends", next);
        let next = vars.substitute("${depends} third");
        vars.set("depends", next);
        assert_eq!(vars.get("depends"), Some("first second third"));
    }

    #[test]
    fn test_set_default_keeps_assigned_value() {
        let mut vars = store(&[("pkgdesc", "set")]);
        vars.set_default("pkgdesc", "");
        vars.set_default("depends", "");
        assert_eq!(vars.get("pkgdesc"), Some("set"));
        assert_eq!(vars.get("depends"), Some(""));
        assert_eq!(vars.substitute("$depends foo"), " foo");
    }
}
