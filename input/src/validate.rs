// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use regex::Regex;
use std::sync::LazyLock;

// `\d` would also accept non-ASCII digits.
static ZIPCODE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("zipcode pattern is valid"));

/// True iff `code` is exactly eight ASCII digits. Nothing is trimmed first.
pub fn is_valid_zipcode(code: &str) -> bool {
  ZIPCODE.is_match(code)
}
