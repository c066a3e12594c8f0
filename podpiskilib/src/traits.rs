//! Трэйты на границах ядра: источник снапшотов и канал уведомлений.

use crate::{error::Result, model::Subscription, notify::BillingEvent};
use std::io::BufRead;

pub trait ReadSnapshot {
    fn read<R: BufRead>(r: R) -> Result<Vec<Subscription>>;
}

/// Канал доставки уведомлений. Внедряется вызывающей стороной,
/// чтобы планировщик тестировался без сети.
pub trait Notifier {
    fn notify(&mut self, event: &BillingEvent) -> Result<()>;
}
