//! Language registry: maps label tags to canonical language identifiers.
//!
//! Lookups fold tags to lowercase, so `XML`, `xml` and `Xml` resolve alike.
//! No fuzzy matching: a tag that is not a registered alias resolves to
//! nothing and its literal gets no injection.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors from building a registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read language config `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid language config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("alias `{alias}` maps to both `{first}` and `{second}`")]
    ConflictingAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("language identifiers and aliases must not be empty")]
    EmptyIdentifier,
}

/// Canonical identifiers and their aliases.
///
/// Derived from common editor language ids and file extensions. Every
/// canonical id is also an alias of itself.
const BUILTIN: &[(&str, &[&str])] = &[
    ("bibtex", &[]),
    ("c", &["h"]),
    ("clojure", &["clj", "cljs"]),
    ("coffee", &["coffeescript", "cakefile"]),
    ("cpp", &["c++", "cxx", "hpp"]),
    ("csharp", &["cs", "c#"]),
    ("css", &["css.erb"]),
    ("dart", &[]),
    ("diff", &["patch", "rej"]),
    ("dockerfile", &[]),
    ("dosbatch", &["bat", "batch"]),
    ("elixir", &["ex", "exs"]),
    ("erlang", &["erl"]),
    ("fsharp", &["fs", "f#"]),
    ("go", &["golang"]),
    ("graphql", &["gql"]),
    ("groovy", &["gvy"]),
    ("handlebars", &["hbs"]),
    ("html", &["htm", "shtml", "xhtml", "inc", "tmpl", "tpl"]),
    ("ini", &["conf"]),
    ("java", &["bsh"]),
    ("javascript", &["js", "jsx", "es6", "mjs", "cjs"]),
    ("js_regexp", &["regexp"]),
    ("json", &["json5"]),
    ("jsonc", &[]),
    ("julia", &["jl"]),
    ("latex", &["tex"]),
    ("less", &[]),
    ("log", &[]),
    ("lua", &[]),
    ("makefile", &["gnumakefile", "ocamlmakefile"]),
    ("markdown", &["md"]),
    ("objc", &["objectivec", "objective-c", "obj-c", "mm"]),
    ("perl", &["pl", "pm", "pod", "psgi"]),
    ("perl6", &["p6", "pl6", "pm6", "nqp"]),
    ("php", &["php3", "php4", "php5", "phpt", "phtml"]),
    ("powershell", &["ps1", "psm1", "psd1", "pwsh"]),
    ("pug", &["jade"]),
    ("python", &["py", "py3", "rpy", "pyw", "cpy", "gyp", "gypi"]),
    ("r", &["rprofile"]),
    ("regexp_python", &["re"]),
    ("rhai", &[]),
    ("ruby", &["rb", "rbx", "rjs", "rakefile", "rake", "gemspec"]),
    ("rust", &["rs"]),
    ("scala", &["sbt"]),
    ("scss", &[]),
    ("shellscript", &["shell", "sh", "bash", "zsh"]),
    ("sql", &["ddl", "dml"]),
    ("swift", &[]),
    ("toml", &[]),
    ("twig", &[]),
    ("typescript", &["ts"]),
    ("typescriptreact", &["tsx"]),
    ("vb", &["vbnet", "vs_net"]),
    ("xml", &["xsd", "tld", "jsp", "rss", "opml", "svg"]),
    ("xsl", &["xslt"]),
    ("yaml", &["yml"]),
];

/// On-disk registry format.
///
/// ```toml
/// builtin = true
///
/// [languages]
/// xml = ["svg", "xhtml"]
/// glsl = ["vert", "frag"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryConfig {
    #[serde(default)]
    builtin: bool,
    #[serde(default)]
    languages: BTreeMap<String, Vec<String>>,
}

/// Maps case-folded aliases to canonical language identifiers.
#[derive(Clone, Debug, Default)]
pub struct LanguageRegistry {
    aliases: FxHashMap<String, String>,
}

impl LanguageRegistry {
    /// An empty registry; every tag is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in language table.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.add_builtin();
        registry
    }

    /// Register each identifier as its own only alias.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for id in ids {
            registry.register(id.as_ref(), std::iter::empty::<&str>())?;
        }
        Ok(registry)
    }

    /// Parse a registry from TOML text.
    ///
    /// Configured languages take precedence: built-in entries (when
    /// `builtin = true`) only fill aliases nobody configured.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = toml::from_str(text)?;
        let mut registry = Self::new();
        for (id, aliases) in &config.languages {
            registry.register(id, aliases)?;
        }
        if config.builtin {
            registry.add_builtin();
        }
        Ok(registry)
    }

    /// Read and parse a TOML registry file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), aliases = registry.len(), "loaded language config");
        Ok(registry)
    }

    /// Register `id` and its aliases.
    ///
    /// Ids compare case-insensitively; the first spelling registered stays
    /// canonical. Re-registering an alias for the same id is a no-op;
    /// claiming an alias that already belongs to another id is an error.
    pub fn register<I, S>(&mut self, id: &str, aliases: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }
        let id = match self.aliases.get(&fold(id)) {
            Some(existing) if fold(existing) == fold(id) => existing.clone(),
            _ => id.to_owned(),
        };
        self.claim(&id, &id)?;
        for alias in aliases {
            self.claim(alias.as_ref(), &id)?;
        }
        Ok(())
    }

    /// Fill in built-in aliases that are not registered yet.
    ///
    /// A built-in language whose id is already an alias of a configured
    /// language folds into that language.
    pub fn add_builtin(&mut self) {
        for &(id, aliases) in BUILTIN {
            let canonical = self.resolve(id).unwrap_or(id).to_owned();
            for alias in std::iter::once(id).chain(aliases.iter().copied()) {
                self.aliases
                    .entry(fold(alias))
                    .or_insert_with(|| canonical.clone());
            }
        }
    }

    /// Canonical identifier for a label tag, if registered.
    pub fn resolve(&self, tag: &str) -> Option<&str> {
        self.aliases.get(&fold(tag.trim())).map(String::as_str)
    }

    /// Number of registered aliases, canonical ids included.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Distinct canonical identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.aliases.values().map(String::as_str).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn claim(&mut self, alias: &str, id: &str) -> Result<(), ConfigError> {
        let folded = fold(alias.trim());
        if folded.is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }
        match self.aliases.get(&folded) {
            Some(existing) if fold(existing) != fold(id) => Err(ConfigError::ConflictingAlias {
                alias: alias.to_owned(),
                first: existing.clone(),
                second: id.to_owned(),
            }),
            Some(_) => Ok(()),
            None => {
                self.aliases.insert(folded, id.to_owned());
                Ok(())
            }
        }
    }
}

fn fold(tag: &str) -> String {
    tag.to_lowercase()
}
