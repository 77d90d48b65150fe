/// Build-time version information for the deployed bundle.
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the application name
    pub fn name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Returns the full version string with name
    pub fn full() -> String {
        format!("{} v{}", Self::name(), Self::current())
    }

    /// Returns a short version string
    pub fn short() -> String {
        format!("v{}", Self::current())
    }

    /// Returns build information
    pub fn build_info() -> String {
        let build_date = option_env!("BUILD_DATE").unwrap_or("unknown");
        let git_commit = option_env!("GIT_COMMIT").unwrap_or("unknown");

        format!(
            "{} v{} (build: {}, commit: {})",
            Self::name(),
            Self::current(),
            build_date,
            git_commit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_current() {
        let version = Version::current();
        assert!(!version.is_empty());
        assert!(version.contains('.'));
    }

    #[test]
    fn test_version_name() {
        assert_eq!(Version::name(), "largify-insights");
    }

    #[test]
    fn test_version_full() {
        let full = Version::full();
        assert!(full.contains("largify-insights"));
        assert!(full.contains('v'));
    }

    #[test]
    fn test_version_short() {
        let short = Version::short();
        assert!(short.starts_with('v'));
        assert!(short.contains('.'));
    }

    #[test]
    fn test_build_info() {
        let build_info = Version::build_info();
        assert!(build_info.contains("largify-insights"));
        assert!(build_info.contains("commit:"));
    }
}
