use anyhow::Context;
use console::Style;
use passgen::strength::StrengthColor;
use passgen::StrengthScore;

use crate::ProgError;

const BAR_WIDTH: usize = 20;

/// A one-line strength bar, e.g. `[############--------] 57 Medium`, coloured by tier.
pub(crate) fn strength_bar(strength: &StrengthScore) -> String {
    let filled = usize::from(strength.score) * BAR_WIDTH / 100;
    let style = match strength.label.color() {
        StrengthColor::Red => Style::new().red(),
        StrengthColor::Yellow => Style::new().yellow(),
        StrengthColor::Green => Style::new().green(),
    };
    format!(
        "[{}{}] {:>3} {}",
        style.apply_to("#".repeat(filled)),
        "-".repeat(BAR_WIDTH - filled),
        strength.score,
        style.apply_to(strength.label),
    )
}

pub(crate) fn score_password(password: Option<String>) -> Result<(), ProgError> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")
            .context("failed to read password from TTY")?,
    };
    let strength = passgen::strength::score(&password);
    println!("{}", strength_bar(&strength));
    Ok(())
}

pub(crate) fn check_master_password() -> Result<(), ProgError> {
    let password = passgen::Password::from(
        rpassword::prompt_password("Master password: ")
            .context("failed to read password from TTY")?,
    );
    let confirm_password = passgen::Password::from(
        rpassword::prompt_password("Confirm password: ")
            .context("failed to read password from TTY")?,
    );
    if password != confirm_password {
        return Err(ProgError::PasswordsDidntMatch);
    }

    println!("{}", strength_bar(&password.strength()));
    match passgen::policy::check(password.as_str()) {
        Ok(()) => {
            eprintln!("The password meets the requirements.");
            Ok(())
        }
        Err(violations) => {
            for violation in violations {
                eprintln!("  - {violation}");
            }
            Err(ProgError::PolicyFailed)
        }
    }
}
