//! This module defines [TranslationMode].

/// Exponent of the default factor by which weights are scaled
pub const DEFAULT_POWER_OF_TEN: i32 = 5;

/// Configuration of a translation session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationMode {
    /// Whether rules without weight are encoded as well
    translate_hard_rules: bool,
    /// Whether violations are marked by explicit `unsat` atoms
    use_unsat: bool,
    /// Whether soft constraints are guarded by `ext_helper`
    two_solve_calls: bool,
    /// Weights are multiplied by `10^power_of_ten` before rounding
    power_of_ten: i32,
}

impl Default for TranslationMode {
    fn default() -> Self {
        Self {
            translate_hard_rules: false,
            use_unsat: false,
            two_solve_calls: false,
            power_of_ten: DEFAULT_POWER_OF_TEN,
        }
    }
}

impl TranslationMode {
    /// Set whether hard rules are translated.
    pub fn with_translate_hard_rules(mut self, value: bool) -> Self {
        self.translate_hard_rules = value;
        self
    }

    /// Set whether the encoding with `unsat` atoms is used.
    pub fn with_use_unsat(mut self, value: bool) -> Self {
        self.use_unsat = value;
        self
    }

    /// Set whether the output is prepared for two solver calls.
    pub fn with_two_solve_calls(mut self, value: bool) -> Self {
        self.two_solve_calls = value;
        self
    }

    /// Set the exponent by which weights are scaled.
    pub fn with_power_of_ten(mut self, value: i32) -> Self {
        self.power_of_ten = value;
        self
    }

    /// Return whether hard rules are translated.
    pub fn translate_hard_rules(&self) -> bool {
        self.translate_hard_rules
    }

    /// Return whether the encoding with `unsat` atoms is used.
    pub fn use_unsat(&self) -> bool {
        self.use_unsat
    }

    /// Return whether the output is prepared for two solver calls.
    pub fn two_solve_calls(&self) -> bool {
        self.two_solve_calls
    }

    /// Return the exponent by which weights are scaled.
    pub fn power_of_ten(&self) -> i32 {
        self.power_of_ten
    }
}
