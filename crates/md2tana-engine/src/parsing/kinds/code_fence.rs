pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string when the trimmed line is a backtick fence.
    ///
    /// The same check serves for openers and closers; a closer simply has
    /// an (ignored) empty info string.
    pub fn sig(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::BACKTICKS).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_with_lang() {
        assert_eq!(CodeFence::sig("```rust"), Some("rust"));
    }

    #[test]
    fn detect_indented_fence() {
        assert_eq!(CodeFence::sig("    ```  py  "), Some("py"));
    }

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::sig("```"), Some(""));
    }

    #[test]
    fn tildes_are_not_fences() {
        assert_eq!(CodeFence::sig("~~~"), None);
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello ```"), None);
    }
}
