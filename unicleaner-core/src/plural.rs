//! Russian count formatting
//!
//! The noun and the verb of the removal message follow two separate rules.
//! They are kept apart on purpose; do not merge them into one.

/// Grammatical number of a counted noun
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluralForm {
    /// 1, 21, 101, ...
    One,
    /// 2-4, 22-24, ...
    Few,
    /// 0, 5-20, 25-30, ... and every 11-19 ending
    Many,
}

/// Singular noun phrase
pub const INVISIBLE_ONE: &str = "невидимый символ";
/// "Few" noun phrase
pub const INVISIBLE_FEW: &str = "невидимых символа";
/// Plural noun phrase
pub const INVISIBLE_MANY: &str = "невидимых символов";

/// Message shown when nothing was found
pub const NOTHING_FOUND: &str = "Невидимые символы не найдены.";

/// Pick the noun form for `count`
pub fn plural_form(count: i64) -> PluralForm {
    let num = count.unsigned_abs() % 100;
    let last_digit = num % 10;

    if num > 10 && num < 20 {
        return PluralForm::Many;
    }
    match last_digit {
        1 => PluralForm::One,
        2..=4 => PluralForm::Few,
        _ => PluralForm::Many,
    }
}

/// "invisible character(s)" agreed with `count`
pub fn pluralize(count: i64) -> &'static str {
    match plural_form(count) {
        PluralForm::One => INVISIBLE_ONE,
        PluralForm::Few => INVISIBLE_FEW,
        PluralForm::Many => INVISIBLE_MANY,
    }
}

/// "was/were removed" agreed with `count`
pub fn removal_verb(count: i64) -> &'static str {
    let num = count.unsigned_abs() % 100;
    let last_digit = num % 10;

    if last_digit == 1 && num != 11 {
        "Удален"
    } else {
        "Удалено"
    }
}

/// Live counter label, e.g. `"3 невидимых символа"`
pub fn count_label(count: i64) -> String {
    format!("{} {}", count, pluralize(count))
}

/// Summary shown after cleaning
pub fn removal_notice(count: i64) -> String {
    if count == 0 {
        return NOTHING_FOUND.to_string();
    }
    format!("{} {} {}.", removal_verb(count), count, pluralize(count))
}
