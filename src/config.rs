/// Default limit on how deeply an expression may nest.
///
/// Parentheses, prefix signs and the right-hand side of `^` each count as one
/// level.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Display name of the outermost evaluation context.
pub const DEFAULT_CONTEXT_NAME: &str = "<program>";

/// Settings for one run of the pipeline.
///
/// # Example
/// ```
/// use waju::config::Options;
///
/// let options = Options { max_depth: 3,
///                         ..Options::default() };
/// assert!(waju::run_with_options(&options, "<stdin>", "((1))").is_ok());
/// assert!(waju::run_with_options(&options, "<stdin>", "((((1))))").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Deepest nesting the parser accepts before reporting an error.
    pub max_depth:    usize,
    /// Name shown for the outermost frame of runtime tracebacks.
    pub context_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth:    DEFAULT_MAX_DEPTH,
               context_name: DEFAULT_CONTEXT_NAME.to_string(), }
    }
}
