//! Interactive text menu.
//!
//! Generic over its input, output and random source so it can be driven by
//! stdin/stdout in the binary and by in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate;
use crate::generator::{generate_custom_with, generate_simple_with, generate_strong_with};
use crate::types::StrengthReport;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// `Break` ends the menu loop (end of input), `Continue` carries the value.
type Step<T = ()> = Result<ControlFlow<(), T>, MenuError>;

const WIDTH: usize = 70;

pub struct Menu<I, O, R> {
    input: I,
    output: O,
    rng: R,
}

impl<I: BufRead, O: Write, R: Rng> Menu<I, O, R> {
    pub fn new(input: I, output: O, rng: R) -> Self {
        Menu { input, output, rng }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<(), MenuError> {
        self.print_welcome()?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nChoose an option (1-5): ")? else {
                break;
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(choice = choice.trim(), "menu choice");

            let step = match choice.trim() {
                "1" => self.simple_password()?,
                "2" => self.strong_password()?,
                "3" => self.custom_password()?,
                "4" => self.check_strength()?,
                "5" => {
                    writeln!(
                        self.output,
                        "\n👋 Thank you for using Password Generator! Stay secure!\n"
                    )?;
                    break;
                }
                _ => {
                    writeln!(self.output, "\n❌ Invalid choice! Please select 1-5.\n")?;
                    ControlFlow::Continue(())
                }
            };

            if step.is_break() {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_welcome(&mut self) -> Result<(), MenuError> {
        let rule = "=".repeat(WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "Welcome to Password Generator!")?;
        writeln!(self.output, "Create strong and secure passwords easily")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        let rule = "=".repeat(WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "🔐 PASSWORD GENERATOR 🔐")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "\nGeneration Options:")?;
        writeln!(self.output, "1️⃣  Simple Password (Letters + Numbers)")?;
        writeln!(
            self.output,
            "2️⃣  Strong Password (Letters + Numbers + Special Characters)"
        )?;
        writeln!(self.output, "3️⃣  Custom Password (Choose what to include)")?;
        writeln!(self.output, "4️⃣  Check Password Strength")?;
        writeln!(self.output, "5️⃣  Exit")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Prints `text` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, MenuError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// `Continue(None)` when the answer was rejected (message already shown).
    fn read_length(&mut self) -> Step<Option<usize>> {
        let Some(answer) = self.prompt("\n📏 Enter desired password length: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let length = match answer.trim().parse::<i64>() {
            Ok(n) if n < 1 => {
                writeln!(self.output, "❌ Password length must be at least 1!")?;
                None
            }
            Ok(n) => match usize::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    writeln!(self.output, "❌ Invalid input! Please enter a number.")?;
                    None
                }
            },
            Err(_) => {
                writeln!(self.output, "❌ Invalid input! Please enter a number.")?;
                None
            }
        };
        Ok(ControlFlow::Continue(length))
    }

    fn read_yes_no(&mut self, question: &str) -> Step<bool> {
        match self.prompt(&format!("{question} (y/n): "))? {
            Some(answer) => Ok(ControlFlow::Continue(answer.trim().eq_ignore_ascii_case("y"))),
            None => Ok(ControlFlow::Break(())),
        }
    }

    fn simple_password(&mut self) -> Step {
        let length = match self.read_length()? {
            ControlFlow::Continue(Some(length)) => length,
            ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };

        match generate_simple_with(&mut self.rng, length) {
            Ok(password) => {
                let rule = "-".repeat(WIDTH);
                writeln!(self.output, "\n{rule}")?;
                writeln!(self.output, "✅ Generated Simple Password:")?;
                self.print_password_lines("🔑", &password)?;
                writeln!(self.output, "{rule}")?;
            }
            Err(e) => writeln!(self.output, "❌ Error: {e}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn strong_password(&mut self) -> Step {
        let length = match self.read_length()? {
            ControlFlow::Continue(Some(length)) => length,
            ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };

        match generate_strong_with(&mut self.rng, length) {
            Ok(password) => {
                let report = evaluate(&password);
                let rule = "-".repeat(WIDTH);
                writeln!(self.output, "\n{rule}")?;
                writeln!(self.output, "✅ Generated Strong Password:")?;
                self.print_password_lines("🔑", &password)?;
                self.print_strength(&report)?;
                writeln!(self.output, "{rule}")?;
            }
            Err(e) => writeln!(self.output, "❌ Error: {e}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn custom_password(&mut self) -> Step {
        let rule = "-".repeat(WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "📋 Custom Password Options:")?;
        writeln!(self.output, "{rule}")?;

        let length = match self.read_length()? {
            ControlFlow::Continue(Some(length)) => length,
            ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };

        writeln!(self.output, "\nSelect character types to include:")?;
        let mut flags = [false; 4];
        let questions = [
            "Include lowercase letters?",
            "Include uppercase letters?",
            "Include numbers?",
            "Include special characters?",
        ];
        for (flag, question) in flags.iter_mut().zip(questions) {
            match self.read_yes_no(question)? {
                ControlFlow::Continue(yes) => *flag = yes,
                ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
            }
        }
        let [lower, upper, digits, special] = flags;

        match generate_custom_with(&mut self.rng, length, lower, upper, digits, special) {
            Ok(password) => {
                let report = evaluate(&password);
                writeln!(self.output, "\n{rule}")?;
                writeln!(self.output, "✅ Generated Custom Password:")?;
                self.print_password_lines("🔑", &password)?;
                self.print_strength(&report)?;
                self.print_suggestions(&report, "   ")?;
                writeln!(self.output, "{rule}")?;
            }
            Err(e) => writeln!(self.output, "\n❌ Error: {e}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn check_strength(&mut self) -> Step {
        let rule = "-".repeat(WIDTH);
        writeln!(self.output, "\n{rule}")?;
        let Some(answer) = self.prompt("🔑 Enter password to check: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        if answer.is_empty() {
            writeln!(self.output, "❌ Password cannot be empty!")?;
            return Ok(ControlFlow::Continue(()));
        }

        let password = SecretString::new(answer.into());
        let report = evaluate(&password);

        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "Password Analysis:")?;
        self.print_password_lines("🔐", &password)?;
        self.print_strength(&report)?;
        if !report.suggestions.is_empty() {
            writeln!(self.output)?;
        }
        self.print_suggestions(&report, "   ")?;
        writeln!(self.output, "{rule}")?;
        Ok(ControlFlow::Continue(()))
    }

    fn print_password_lines(&mut self, icon: &str, password: &SecretString) -> Result<(), MenuError> {
        let pwd = password.expose_secret();
        writeln!(self.output, "   {icon} {pwd}")?;
        writeln!(self.output, "   📏 Length: {} characters", pwd.chars().count())?;
        Ok(())
    }

    fn print_strength(&mut self, report: &StrengthReport) -> Result<(), MenuError> {
        let strength = report.strength();
        writeln!(self.output, "   💪 Strength: {} {}", strength.icon(), strength)?;
        Ok(())
    }

    fn print_suggestions(&mut self, report: &StrengthReport, indent: &str) -> Result<(), MenuError> {
        if report.suggestions.is_empty() {
            return Ok(());
        }
        writeln!(self.output, "{indent}📝 Suggestions to improve:")?;
        for suggestion in &report.suggestions {
            writeln!(self.output, "{indent}   - {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::io::Cursor;

    fn run_menu(input: &str) -> String {
        let mut menu = Menu::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            SmallRng::seed_from_u64(1),
        );
        menu.run().expect("menu failed");
        String::from_utf8(menu.into_output()).expect("output is not utf-8")
    }

    fn line_after<'a>(output: &'a str, marker: &str) -> &'a str {
        let start = output.find(marker).expect("marker not found") + marker.len();
        output[start..].lines().next().unwrap_or("")
    }

    #[test]
    fn test_exit_option() {
        let output = run_menu("5\n");
        assert!(output.contains("Welcome to Password Generator!"));
        assert!(output.contains("Thank you for using Password Generator! Stay secure!"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let output = run_menu("");
        assert_eq!(output.matches("PASSWORD GENERATOR").count(), 1);
        assert!(!output.contains("Thank you"));
    }

    #[test]
    fn test_invalid_choice() {
        let output = run_menu("9\n5\n");
        assert!(output.contains("Invalid choice! Please select 1-5."));
        assert_eq!(output.matches("PASSWORD GENERATOR").count(), 2);
    }

    #[test]
    fn test_simple_password() {
        let output = run_menu("1\n12\n5\n");
        assert!(output.contains("Generated Simple Password:"));
        let password = line_after(&output, "🔑 ");
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(output.contains("Length: 12 characters"));
    }

    #[test]
    fn test_length_rejections() {
        let output = run_menu("1\nabc\n1\n0\n1\n-3\n5\n");
        assert_eq!(output.matches("Invalid input! Please enter a number.").count(), 1);
        assert_eq!(output.matches("Password length must be at least 1!").count(), 2);
        assert!(!output.contains("Generated Simple Password"));
    }

    #[test]
    fn test_strong_password_too_short() {
        let output = run_menu("2\n3\n5\n");
        assert!(output.contains("❌ Error: Strong password must be at least 4 characters!"));
        assert!(!output.contains("Generated Strong Password"));
    }

    #[test]
    fn test_strong_password_shows_strength() {
        let output = run_menu("2\n16\n5\n");
        assert!(output.contains("Generated Strong Password:"));
        assert!(output.contains("💪 Strength: "));
        assert_eq!(line_after(&output, "🔑 ").chars().count(), 16);
    }

    #[test]
    fn test_custom_nothing_selected() {
        let output = run_menu("3\n10\nn\nn\nn\nn\n5\n");
        assert!(output.contains("❌ Error: Select at least one character type!"));
    }

    #[test]
    fn test_custom_digits_only_with_suggestions() {
        let output = run_menu("3\n10\nn\nN\n Y \nn\n5\n");
        let password = line_after(&output, "🔑 ");
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
        assert!(output.contains("Strength: ⚠️ Weak"));
        assert!(output.contains("- Add lowercase letters"));
        assert!(output.contains("- Add uppercase letters"));
        assert!(output.contains("- Add special characters"));
        assert!(!output.contains("- Add numbers"));
    }

    #[test]
    fn test_custom_end_of_input_mid_questions() {
        let output = run_menu("3\n10\ny\n");
        assert!(!output.contains("Generated Custom Password"));
        assert!(!output.contains("Thank you"));
    }

    #[test]
    fn test_check_empty_password() {
        let output = run_menu("4\n\n5\n");
        assert!(output.contains("Password cannot be empty!"));
    }

    #[test]
    fn test_check_password_strength() {
        let output = run_menu("4\nabcdefgh\n5\n");
        assert!(output.contains("Password Analysis:"));
        assert!(output.contains("🔐 abcdefgh"));
        assert!(output.contains("Strength: ⚠️ Weak"));
        assert!(output.contains("Suggestions to improve:"));
        assert!(output.contains("- Add uppercase letters"));
        assert!(!output.contains("- Add lowercase letters"));
    }

    #[test]
    fn test_check_keeps_surrounding_spaces() {
        let output = run_menu("4\n Abcdef1!\r\n5\n");
        assert!(output.contains("Length: 9 characters"));
        assert!(output.contains("Strength: 🔒 Very Strong"));
        assert!(!output.contains("Suggestions to improve:"));
    }
}
