/// Caps enforced before and during compilation so pathological input
/// cannot drive unbounded work or recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileLimits {
    /// Maximum query length in characters.
    pub max_input_len: usize,
    /// Maximum parenthesis nesting depth.
    pub max_nesting: usize,
}

impl Default for CompileLimits {
    fn default() -> Self {
        CompileLimits {
            max_input_len: 1024,
            max_nesting: 32,
        }
    }
}
