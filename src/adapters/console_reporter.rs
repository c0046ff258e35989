use crate::domain::FixerKind;
use crate::ports::Reporter;

/// Prints step banners and guidance to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn step_started(&self, fixer: FixerKind) {
        println!("{}", fixer.banner());
    }

    fn guidance(&self, message: &str) {
        println!("\n{}", message);
    }
}
