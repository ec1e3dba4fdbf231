//! Theme commands.

use billease_landing::LandingConfig;
use billease_landing::storage::FileStore;
use billease_landing::theme::ThemePreference;

fn preference(config: &LandingConfig) -> ThemePreference<FileStore> {
    ThemePreference::with_config(FileStore::new(&config.storage.file_path), &config.storage)
}

/// Print the saved theme.
pub fn show(config: &LandingConfig) -> billease_landing::Result<()> {
    let theme = preference(config).current()?;
    print_theme(theme);
    Ok(())
}

/// Switch theme and print the new one.
pub fn toggle(config: &LandingConfig) -> billease_landing::Result<()> {
    let theme = preference(config).toggle()?;
    print_theme(theme);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_theme(theme: billease_core::Theme) {
    println!("{theme} (icon: {})", theme.icon());
}
