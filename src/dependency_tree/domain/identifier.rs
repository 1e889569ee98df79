//! Helpers for the opaque `modulePath[@version]` identifiers emitted by
//! `go mod graph`.

/// Module name given to the throwaway workspace created for `--package`.
pub const WORKSPACE_MODULE: &str = "temp";

/// Prefixes of the synthetic nodes `go mod graph` emits for the Go toolchain.
pub const TOOLCHAIN_PREFIXES: [&str; 2] = ["go@", "toolchain@"];

/// Returns the identifier without its `@version` suffix.
pub fn strip_version(identifier: &str) -> &str {
    identifier
        .split_once('@')
        .map_or(identifier, |(base, _)| base)
}

/// Returns true if the identifier carries an `@version` suffix.
pub fn is_versioned(identifier: &str) -> bool {
    identifier.contains('@')
}

/// Returns true for toolchain pseudo-dependencies such as `go@1.21.0`.
pub fn is_toolchain_dependency(identifier: &str) -> bool {
    TOOLCHAIN_PREFIXES
        .iter()
        .any(|prefix| identifier.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_version() {
        assert_eq!(
            strip_version("github.com/spf13/cobra@v1.7.0"),
            "github.com/spf13/cobra"
        );
        assert_eq!(strip_version("mymodule"), "mymodule");
        assert_eq!(strip_version("a@b@c"), "a");
        assert_eq!(strip_version(""), "");
    }

    #[test]
    fn test_is_versioned() {
        assert!(is_versioned("dep@v1.0.0"));
        assert!(!is_versioned("example.com/local"));
    }

    #[test]
    fn test_is_toolchain_dependency() {
        let cases = [
            ("go@1.21.0", true),
            ("toolchain@go1.21.0", true),
            ("github.com/spf13/cobra@v1.7.0", false),
            ("golang.org/x/mod@v0.14.0", false),
            ("", false),
        ];

        for (identifier, expected) in cases {
            assert_eq!(
                is_toolchain_dependency(identifier),
                expected,
                "is_toolchain_dependency({:?})",
                identifier
            );
        }
    }
}
