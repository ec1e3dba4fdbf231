//! Contact form command.

use billease_landing::LandingConfig;
use billease_landing::contact::ContactForm;
use billease_landing::notification::NotificationCenter;

/// Validate a contact form submission and print the outcome.
///
/// # Errors
///
/// Returns the validation errors if any field is invalid.
pub fn submit(
    config: &LandingConfig,
    name: String,
    email: String,
    message: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = ContactForm {
        name,
        email,
        message,
    };

    match form.validate() {
        Ok(submission) => {
            let mut notices = NotificationCenter::new(config.notifications);
            print_line(&notices.contact_success().message);
            tracing::debug!(email = %submission.email, "Contact submission accepted");
            Ok(())
        }
        Err(errors) => {
            for error in errors.errors() {
                print_line(&format!("{}: {error}", error.field().id()));
            }
            Err(errors.into())
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
