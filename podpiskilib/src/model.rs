//! Доменная модель — снапшот подписки, как его отдаёт слой хранения.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PodpiskiError, Result};

fn default_period() -> u32 {
    1
}

fn default_currency() -> String {
    "RUB".into()
}

fn default_true() -> bool {
    true
}

/// Неизменяемый снимок подписки. Ядро его не хранит и не мутирует:
/// каждый расчёт — чистая функция от снапшота и опорной даты.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    /// цена в минорных единицах (копейки)
    pub price: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// день месяца 1..=31; в коротких месяцах прижимается к последнему дню
    pub billing_day: u32,
    /// месяцев между списаниями; отсутствует в снапшоте — значит 1
    #[serde(default = "default_period")]
    pub period_months: u32,
    #[serde(default)]
    pub category: Option<String>,
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub auto_renewal: bool,
    #[serde(default)]
    pub notify_days_before: u32,
    pub created_at: NaiveDate,
}

impl Subscription {
    /// Проверка инвариантов на границе ввода. Ядро снапшоты не перепроверяет,
    /// поэтому битые записи должны отсеиваться здесь.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(PodpiskiError::Validation(format!(
                "subscription {}: empty name",
                self.id
            )));
        }
        if !(1..=31).contains(&self.billing_day) {
            return Err(PodpiskiError::Validation(format!(
                "subscription {}: billing_day {} out of range 1..=31",
                self.id, self.billing_day
            )));
        }
        if self.period_months == 0 {
            return Err(PodpiskiError::Validation(format!(
                "subscription {}: period_months must be >= 1",
                self.id
            )));
        }
        let re = Regex::new(r"^[A-Z]{3}$").map_err(|e| PodpiskiError::Parse(e.to_string()))?;
        if !re.is_match(&self.currency) {
            return Err(PodpiskiError::Validation(format!(
                "subscription {}: bad currency code {:?}",
                self.id, self.currency
            )));
        }
        Ok(())
    }
}
