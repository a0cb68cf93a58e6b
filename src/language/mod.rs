//! Filename-based language detection
//!
//! The tag is derived purely from the lowercase extension of the final
//! path segment; it feeds the fenced-code hint in the explanation prompt
//! and the syntax highlighting in the UI. Unknown or absent extensions
//! fall back to [`PLAINTEXT`].

/// Fallback tag for unknown or absent extensions.
pub const PLAINTEXT: &str = "plaintext";

/// Detect the language tag for a filename or URL.
///
/// Total over any input, including the empty string; never fails.
pub fn detect(filename: &str) -> &'static str {
    let name = filename.rsplit('/').next().unwrap_or(filename);

    match name.rsplit_once('.') {
        Some((_, ext)) => from_extension(&ext.to_ascii_lowercase()).unwrap_or(PLAINTEXT),
        None => PLAINTEXT,
    }
}

/// The fixed extension table.
fn from_extension(ext: &str) -> Option<&'static str> {
    let tag = match ext {
        "py" => "python",
        "js" => "javascript",
        "jsx" => "jsx",
        "ts" => "typescript",
        "tsx" => "tsx",
        "html" => "html",
        "css" => "css",
        "json" => "json",
        "md" => "markdown",
        "java" => "java",
        "cpp" => "cpp",
        "c" => "c",
        "go" => "go",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "kt" => "kotlin",
        "rs" => "rust",
        "scala" => "scala",
        "r" => "r",
        "sql" => "sql",
        "sh" => "shell",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" => "ini",
        "xml" => "xml",
        "vue" => "vue",
        "svelte" => "svelte",
        "astro" => "astro",
        _ => return None,
    };
    Some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_extensions() {
        assert_eq!(detect("app.py"), "python");
        assert_eq!(detect("main.rs"), "rust");
        assert_eq!(detect("index.html"), "html");
        assert_eq!(detect("Component.tsx"), "tsx");
        assert_eq!(detect("schema.sql"), "sql");
        assert_eq!(detect("App.vue"), "vue");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(detect("stats.R"), "r");
        assert_eq!(detect("Main.JAVA"), "java");
    }

    #[test]
    fn test_yml_and_yaml_both_map_to_yaml() {
        assert_eq!(detect("ci.yml"), "yaml");
        assert_eq!(detect("ci.yaml"), "yaml");
    }

    #[test]
    fn test_unknown_or_absent_extension_is_plaintext() {
        assert_eq!(detect("README"), PLAINTEXT);
        // Only the last extension counts, and .gz is not in the table
        assert_eq!(detect("archive.tar.gz"), PLAINTEXT);
        assert_eq!(detect("Makefile"), PLAINTEXT);
        assert_eq!(detect(""), PLAINTEXT);
        assert_eq!(detect("no-dot-here"), PLAINTEXT);
    }

    #[test]
    fn test_uses_final_path_segment() {
        assert_eq!(
            detect("https://github.com/acme/widget/blob/main/src/app.py"),
            "python"
        );
        // A dot earlier in the path does not confuse detection
        assert_eq!(detect("v1.2/README"), PLAINTEXT);
    }
}
