//! Code-fence language tags derived from file names.

use super::providers::LanguageDetector;
use std::collections::HashMap;

/// Detects the fence language from a path's file name or extension.
///
/// Identifiers follow the editor language ids (`typescriptreact`,
/// `shellscript`, ...). Configured overrides win over the built-in table.
#[derive(Debug, Clone, Default)]
pub struct ExtensionLanguages {
    overrides: HashMap<String, String>,
}

impl ExtensionLanguages {
    /// Build a detector with extension overrides (keys without leading dot).
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(ext, lang)| (ext.to_lowercase(), lang))
                .collect(),
        }
    }
}

impl LanguageDetector for ExtensionLanguages {
    fn detect(&self, path: &str) -> String {
        let file_name = path
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(path);

        if let Some(lang) = language_for_file_name(file_name) {
            return lang.to_string();
        }

        let Some((stem, ext)) = file_name.rsplit_once('.') else {
            return String::new();
        };
        // Dotfiles like `.env` have no extension.
        if stem.is_empty() {
            return String::new();
        }

        let ext = ext.to_lowercase();
        if let Some(lang) = self.overrides.get(&ext) {
            return lang.clone();
        }
        language_for_extension(&ext).unwrap_or_default().to_string()
    }
}

fn language_for_file_name(name: &str) -> Option<&'static str> {
    let lang = match name {
        "Makefile" | "makefile" | "GNUmakefile" => "makefile",
        "Dockerfile" => "dockerfile",
        "CMakeLists.txt" => "cmake",
        ".bashrc" | ".bash_profile" | ".zshrc" | ".profile" => "shellscript",
        ".gitignore" | ".dockerignore" => "ignore",
        _ => return None,
    };
    Some(lang)
}

fn language_for_extension(ext: &str) -> Option<&'static str> {
    let lang = match ext {
        "rs" => "rust",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "swift" => "swift",
        "rb" => "ruby",
        "php" => "php",
        "lua" => "lua",
        "sh" | "bash" | "zsh" => "shellscript",
        "ps1" => "powershell",
        "sql" => "sql",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "json" => "json",
        "jsonc" => "jsonc",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "md" | "markdown" => "markdown",
        "vue" => "vue",
        "svelte" => "svelte",
        "dart" => "dart",
        "scala" => "scala",
        "hs" => "haskell",
        "ex" | "exs" => "elixir",
        "erl" => "erlang",
        "clj" => "clojure",
        "r" => "r",
        "pl" => "perl",
        "txt" => "plaintext",
        "pbmd" => "pbmd",
        _ => return None,
    };
    Some(lang)
}
