//! Снапшот подписок в CSV: заголовки:
//! id,name,price,currency,billing_day,period_months,category,is_active,auto_renewal,notify_days_before,created_at

use crate::{
    error::{PodpiskiError, Result},
    model::Subscription,
};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::BufRead;

#[derive(serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    price: String,
    currency: Option<String>,
    billing_day: String,
    period_months: Option<String>,
    category: Option<String>,
    is_active: Option<String>,
    auto_renewal: Option<String>,
    notify_days_before: Option<String>,
    created_at: String,
}

fn parse_bool(field: &str, s: &str) -> Result<bool> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(PodpiskiError::Parse(format!("{field}: {other}"))),
    }
}

pub struct Csv;

impl crate::traits::ReadSnapshot for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Subscription>> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut subs = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;

            let sub = Subscription {
                id: row
                    .id
                    .parse()
                    .map_err(|e| PodpiskiError::Parse(format!("id: {e}")))?,
                name: row.name,
                price: row
                    .price
                    .parse()
                    .map_err(|e| PodpiskiError::Parse(format!("price: {e}")))?,
                currency: row
                    .currency
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| "RUB".into()),
                billing_day: row
                    .billing_day
                    .parse()
                    .map_err(|e| PodpiskiError::Parse(format!("billing_day: {e}")))?,
                // пустое поле — месячный период; явный ноль ниже отсеет validate
                period_months: match row.period_months.as_deref() {
                    None | Some("") => 1,
                    Some(v) => v
                        .parse()
                        .map_err(|e| PodpiskiError::Parse(format!("period_months: {e}")))?,
                },
                category: row.category.filter(|s| !s.is_empty()),
                is_active: match row.is_active.as_deref() {
                    None | Some("") => true,
                    Some(v) => parse_bool("is_active", v)?,
                },
                auto_renewal: match row.auto_renewal.as_deref() {
                    None | Some("") => true,
                    Some(v) => parse_bool("auto_renewal", v)?,
                },
                notify_days_before: match row.notify_days_before.as_deref() {
                    None | Some("") => 0,
                    Some(v) => v
                        .parse()
                        .map_err(|e| PodpiskiError::Parse(format!("notify_days_before: {e}")))?,
                },
                created_at: NaiveDate::parse_from_str(&row.created_at, "%Y-%m-%d")
                    .map_err(|e| PodpiskiError::Parse(format!("created_at: {e}")))?,
            };

            sub.validate()?;
            subs.push(sub);
        }

        Ok(subs)
    }
}
