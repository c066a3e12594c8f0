//! Отображение цены: минорные единицы -> строка вида «199.00 ₽».

use rust_decimal::Decimal;

pub fn currency_symbol(code: &str) -> &str {
    match code {
        "RUB" => "₽",
        "USD" => "$",
        "EUR" => "€",
        other => other,
    }
}

/// Цена из минорных единиц с двумя знаками и символом валюты.
/// Деление на 100 делает Decimal со scale 2 — без плавающей точки.
pub fn format_price(minor: u64, currency: &str) -> String {
    let amount = Decimal::new(minor as i64, 2);
    format!("{} {}", amount, currency_symbol(currency))
}
