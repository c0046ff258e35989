use crate::domain::FixerKind;

/// Port for operator-facing output.
pub trait Reporter {
    /// Announce that a fixer is about to run.
    fn step_started(&self, fixer: FixerKind);

    /// Print a follow-up instruction the operator has to act on.
    fn guidance(&self, message: &str);
}
