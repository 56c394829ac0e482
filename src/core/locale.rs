//! Localized message catalogs
//!
//! All user-facing prompt and status text is looked up in a [`Messages`]
//! table so the workflow itself stays language-agnostic. Templates use `{}`
//! as the single positional placeholder, filled with [`fill`].

use std::str::FromStr;

use thiserror::Error;

/// Unrecognized `--lang` value
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognized language '{input}'. Use 'en' or 'ru'")]
pub struct ParseLocaleError {
    pub input: String,
}

/// Supported prompt/status languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// Get the message catalog for this locale
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(ParseLocaleError {
                input: s.to_string(),
            }),
        }
    }
}

/// clap value parser for [`Locale`]
pub fn parse_locale(s: &str) -> Result<Locale, String> {
    s.parse().map_err(|e: ParseLocaleError| e.to_string())
}

/// Prompt and status strings for one language
#[derive(Debug)]
pub struct Messages {
    pub invalid_argument: &'static str,
    pub menu_header: &'static str,
    pub menu_mingw: &'static str,
    pub menu_msvc: &'static str,
    pub menu_prompt: &'static str,
    pub menu_invalid: &'static str,
    pub selected: &'static str,
    pub install_target: &'static str,
    pub already_installed: &'static str,
    pub downloading: &'static str,
    pub archive_exists: &'static str,
    pub extracting: &'static str,
    pub renaming: &'static str,
    pub removed_archive: &'static str,
    pub remove_archive_failed: &'static str,
    pub success: &'static str,
}

/// Fill the first `{}` placeholder in a message template
pub fn fill(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

/// English catalog
pub static EN: Messages = Messages {
    invalid_argument: "Invalid argument. Use 'mingw' or 'msvc'",
    menu_header: "Select library type to install:",
    menu_mingw: "1 - MinGW",
    menu_msvc: "2 - MSVC",
    menu_prompt: "Your choice (1/2): ",
    menu_invalid: "Invalid choice. Try again.",
    selected: "Selected option: {}",
    install_target: "SDL3 will be installed into: {}",
    already_installed: "SDL3 already exists in {}",
    downloading: "Downloading {}...",
    archive_exists: "Archive already exists: {}",
    extracting: "Extracting archive...",
    renaming: "Renaming {}...",
    removed_archive: "Removed archive {}",
    remove_archive_failed: "Archive removal error: {}",
    success: "SDL3 ({}) successfully installed",
};

/// Russian catalog
pub static RU: Messages = Messages {
    invalid_argument: "Неверный аргумент. Используйте 'mingw' или 'msvc'",
    menu_header: "Выберите тип библиотеки для установки:",
    menu_mingw: "1 - MinGW",
    menu_msvc: "2 - MSVC",
    menu_prompt: "Ваш выбор (1/2): ",
    menu_invalid: "Неверный выбор. Попробуйте снова.",
    selected: "Выбран вариант: {}",
    install_target: "SDL3 будет установлена в: {}",
    already_installed: "SDL3 уже существует в {}",
    downloading: "Загрузка {}...",
    archive_exists: "Архив уже существует: {}",
    extracting: "Распаковка архива...",
    renaming: "Переименование {}...",
    removed_archive: "Архив {} удалён",
    remove_archive_failed: "Ошибка удаления архива: {}",
    success: "SDL3 ({}) успешно установлена",
};
